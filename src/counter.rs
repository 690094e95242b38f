//! Monotonic counters for the result screen's fabricated statistics.

/// Counts up by a fixed step and clamps at its target.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    value: u32,
    step: u32,
    target: u32,
}

impl Counter {
    pub fn new(step: u32, target: u32) -> Self {
        Self { value: 0, step, target }
    }

    /// Advances one step. Returns true once the target is reached.
    pub fn step(&mut self) -> bool {
        self.value = self.value.saturating_add(self.step).min(self.target);
        self.is_done()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }
}

/// "3247" -> "3,247"
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Integer tenths rendered as "4.8".
pub fn format_tenths(tenths: u32) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::Defaults;

    #[test]
    fn users_counter_lands_exactly_on_target() {
        let mut c = Counter::new(Defaults::USERS_STEP, Defaults::USERS_TARGET);
        let mut steps = 0;
        while !c.step() {
            assert!(c.value() < Defaults::USERS_TARGET);
            steps += 1;
        }
        assert_eq!(c.value(), 3247);
        // 64 steps reach 3200, the 65th clamps
        assert_eq!(steps + 1, 65);
        c.step();
        assert_eq!(c.value(), 3247);
    }

    #[test]
    fn rating_counter_reaches_four_point_eight() {
        let mut c = Counter::new(Defaults::RATING_STEP_TENTHS, Defaults::RATING_TARGET_TENTHS);
        let mut steps = 0;
        while !c.step() {
            steps += 1;
        }
        assert_eq!(steps + 1, 48);
        assert_eq!(format_tenths(c.value()), "4.8");
        assert!((c.value() as f64 / 10.0 - 4.8).abs() < 0.05);
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let mut c = Counter::new(5, 0);
        assert!(c.is_done());
        assert!(c.step());
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(3247), "3,247");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn tenths_formatting() {
        assert_eq!(format_tenths(0), "0.0");
        assert_eq!(format_tenths(48), "4.8");
        assert_eq!(format_tenths(50), "5.0");
    }
}
