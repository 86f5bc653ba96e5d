use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeedResult {
    pub seed: i32,
    pub passed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestReport {
    pub name: String,
    pub algorithm: String,
    pub results: Vec<SeedResult>,
}

impl TestReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result for {}", self.name)?;
        for r in &self.results {
            let verdict = if r.passed { "True" } else { "False" };
            write!(f, "\nSeed: {}  Result: {}", r.seed, verdict)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub seeds: Vec<i32>,
    pub tests: Vec<TestReport>,
}

impl RunReport {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.tests.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}
