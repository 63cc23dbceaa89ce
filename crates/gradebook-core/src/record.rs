use serde::{Deserialize, Serialize};

/// One student's scores.
///
/// Scores are taken as-is: no range validation, negative and extreme values
/// are carried through arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub kor: i32,
    pub eng: i32,
    pub math: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, kor: i32, eng: i32, math: i32) -> Self {
        Self {
            name: name.into(),
            kor,
            eng,
            math,
        }
    }

    /// Sum of the three scores, widened so extreme i32 inputs cannot overflow.
    pub fn total(&self) -> i64 {
        self.kor as i64 + self.eng as i64 + self.math as i64
    }
}
