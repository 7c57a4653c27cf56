use std::fmt::Display;

use assert_call::call;

use crate::Component;

/// Component that records its creation, updates and disposal with [`call!`].
pub struct Probe(String);

impl Probe {
    pub fn new(name: impl Display) -> Self {
        let name = name.to_string();
        call!("{name} new");
        Probe(name)
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Component for Probe {
    fn update(&mut self) {
        call!("{} update", self.0);
    }
    fn dispose(&mut self) {
        call!("{} dispose", self.0);
    }
}
