pub mod gad7;
pub mod phq9;
pub mod pss10;
pub mod sleep_hygiene;

/// Two-week frequency scale shared by PHQ-9 and GAD-7.
pub(crate) const FREQUENCY_0_3: [(u32, &str); 4] = [
    (0, "Not at all"),
    (1, "Several days"),
    (2, "More than half the days"),
    (3, "Nearly every day"),
];
