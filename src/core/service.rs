use crate::core::calculator::LuckyNumberCalculator;
use crate::domain::model::{
    CalculateSubmission, Gender, HouseDirection, LuckyNumberRequest, LuckyNumberResult,
};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{LuckyError, Result};
use crate::utils::validation::{non_blank, validate_min_chars};
use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

pub const MIN_NAME_CHARS: usize = 2;

pub const MSG_NAME_TOO_SHORT: &str = "Tên phải có ít nhất 2 ký tự";
pub const MSG_INVALID_BIRTH_DATE: &str = "Ngày sinh không hợp lệ";
pub const MSG_FUTURE_BIRTH_DATE: &str = "Ngày sinh không được ở tương lai";
pub const MSG_INVALID_GENDER: &str = "Giới tính không hợp lệ";
pub const MSG_INVALID_DIRECTION: &str = "Hướng nhà không hợp lệ";

/// Validates submissions and turns them into results.
pub struct LuckyService<C: Clock = SystemClock> {
    calculator: LuckyNumberCalculator,
    clock: C,
}

impl LuckyService<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for LuckyService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LuckyService<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            calculator: LuckyNumberCalculator::new(),
            clock,
        }
    }

    pub fn calculate(&self, submission: CalculateSubmission) -> Result<LuckyNumberResult> {
        let request = validate_submission(submission, self.clock.today())?;
        let reading = self.calculator.calculate(&request);

        tracing::info!(
            element = %reading.element,
            stem = %reading.stem,
            branch = %reading.branch,
            numbers = ?reading.lucky_numbers,
            "Calculated lucky numbers"
        );

        let id = Uuid::new_v4().to_string();
        Ok(reading.into_result(id, request, self.clock.now()))
    }
}

/// Checks required fields and formats, deriving age from the birth date.
pub fn validate_submission(
    submission: CalculateSubmission,
    today: NaiveDate,
) -> Result<LuckyNumberRequest> {
    let full_name = non_blank(submission.full_name.as_deref());
    let birth_date = non_blank(submission.birth_date.as_deref());
    let gender = non_blank(submission.gender.as_deref());

    let (full_name, birth_date, gender) = match (full_name, birth_date, gender) {
        (Some(n), Some(b), Some(g)) => (n, b, g),
        _ => {
            let missing = [
                ("fullName", full_name.is_none()),
                ("birthDate", birth_date.is_none()),
                ("gender", gender.is_none()),
            ]
            .into_iter()
            .filter(|(_, absent)| *absent)
            .map(|(field, _)| field.to_string())
            .collect();
            return Err(LuckyError::MissingFields { fields: missing });
        }
    };

    validate_min_chars("fullName", full_name, MIN_NAME_CHARS, MSG_NAME_TOO_SHORT)?;

    let birth_date = parse_birth_date(birth_date)?;
    if birth_date > today {
        return Err(LuckyError::validation("birthDate", MSG_FUTURE_BIRTH_DATE));
    }

    let gender: Gender = gender
        .parse()
        .map_err(|_| LuckyError::validation("gender", MSG_INVALID_GENDER))?;

    let house_direction = non_blank(submission.house_direction.as_deref())
        .map(|d| d.parse::<HouseDirection>())
        .transpose()
        .map_err(|_| LuckyError::validation("houseDirection", MSG_INVALID_DIRECTION))?;

    let profession = non_blank(submission.profession.as_deref()).map(str::to_string);

    Ok(LuckyNumberRequest {
        full_name: full_name.to_string(),
        birth_date,
        gender,
        age: derive_age(birth_date, today),
        house_direction,
        profession,
    })
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is used.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| LuckyError::validation("birthDate", MSG_INVALID_BIRTH_DATE))
}

/// Whole years between `birth` and `today`; 0 if `today` precedes `birth`.
pub fn derive_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth).unwrap_or(0)
}
