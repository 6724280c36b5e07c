//! Sample command - print built-in demo property datasets

use crate::samples;
use clap::{Args, ValueEnum};

#[derive(Args, Debug)]
pub struct SampleCommand {
    /// Which demo dataset to print
    #[arg(short, long, value_enum, default_value_t = Scenario::A)]
    scenario: Scenario,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Scenario {
    /// Single recent self-occupied RCC floor
    #[default]
    A,
    /// Two older rented floors plus a vacant strip
    B,
}

impl SampleCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let property = match self.scenario {
            Scenario::A => samples::example_a(),
            Scenario::B => samples::example_b(),
        };
        println!("{}", serde_json::to_string_pretty(&property)?);
        Ok(())
    }
}
