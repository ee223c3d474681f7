/// Count-up from zero to a target, advanced once per animation frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CounterAnimation {
    target: u64,
    step: u64,
    count: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CounterFrame {
    Running(u64),
    Finished(u64),
}

impl CounterFrame {
    pub fn value(self) -> u64 {
        match self {
            Self::Running(value) | Self::Finished(value) => value,
        }
    }
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            step: (target / 100).max(1),
            count: 0,
        }
    }

    /// Reads a `data-target` style attribute; anything non-numeric counts to zero.
    pub fn from_attr(value: &str) -> Self {
        Self::new(value.trim().parse::<u64>().unwrap_or(0))
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.count = self.count.saturating_add(self.step);
        if self.count < self.target {
            CounterFrame::Running(self.count)
        } else {
            self.count = self.target;
            CounterFrame::Finished(self.target)
        }
    }
}
