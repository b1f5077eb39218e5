//! Input ranges accepted from the planning form.

/// Bounds on raw user input, checked before a request reaches the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLimits {
    pub min_days: u32,
    pub max_days: u32,
    pub min_budget: f64,
    pub max_budget: f64,
}

impl FormLimits {
    /// Check a day count typed into the form.
    pub fn check_days(&self, days: u32) -> Result<u32, String> {
        if (self.min_days..=self.max_days).contains(&days) {
            Ok(days)
        } else {
            Err(format!(
                "days must be between {} and {}, got {}",
                self.min_days, self.max_days, days
            ))
        }
    }

    /// Check a budget typed into the form.
    pub fn check_budget(&self, budget: f64) -> Result<f64, String> {
        if (self.min_budget..=self.max_budget).contains(&budget) {
            Ok(budget)
        } else {
            Err(format!(
                "budget must be between {} and {}, got {}",
                self.min_budget, self.max_budget, budget
            ))
        }
    }
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            min_days: 1,
            max_days: 14,
            min_budget: 300.0,
            max_budget: 10_000.0,
        }
    }
}
