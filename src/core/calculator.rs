use crate::core::numerology::name_number;
use crate::core::tables::{EarthlyBranch, Element, HeavenlyStem};
use crate::domain::model::{
    BranchReading, ElementReading, Gender, LuckyNumberRequest, LuckyNumberResult, StemReading,
};
use chrono::{DateTime, Datelike, Utc};

pub const MAX_LUCKY_NUMBERS: usize = 7;
pub const MAX_LUCKY_VALUE: u32 = 99;

const MALE_NUMBERS: [u32; 5] = [1, 3, 5, 7, 9];
const FEMALE_NUMBERS: [u32; 5] = [2, 4, 6, 8, 10];

/// Everything derived from a request, before identity and timestamp are
/// attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuckyReading {
    pub name_number: u32,
    pub element: Element,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub lucky_numbers: Vec<u8>,
}

impl LuckyReading {
    pub fn element_description(&self) -> String {
        format!("Bạn thuộc hành {}, có tính cách {}", self.element, self.element.traits())
    }

    pub fn stem_description(&self) -> String {
        format!("Thiên can {} mang lại {}", self.stem, self.stem.meaning())
    }

    pub fn branch_description(&self) -> String {
        format!("Địa chi {} tượng trưng cho {}", self.branch, self.branch.meaning())
    }

    pub fn into_result(
        self,
        id: String,
        request: LuckyNumberRequest,
        created_at: DateTime<Utc>,
    ) -> LuckyNumberResult {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        LuckyNumberResult {
            id,
            request,
            lucky_days: owned(self.element.days()),
            lucky_hours: owned(self.element.hours()),
            lucky_colors: owned(self.element.colors()),
            feng_shui_advice: self.element.advice().to_string(),
            five_elements: ElementReading {
                element: self.element,
                description: self.element_description(),
            },
            heavenly_stems: StemReading {
                stem: self.stem,
                description: self.stem_description(),
            },
            earthly_branches: BranchReading {
                branch: self.branch,
                description: self.branch_description(),
            },
            lucky_numbers: self.lucky_numbers,
            created_at,
        }
    }
}

/// Stateless calculator over the fixed lookup tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuckyNumberCalculator;

impl LuckyNumberCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, request: &LuckyNumberRequest) -> LuckyReading {
        let year = request.birth_date.year();
        let name_number = name_number(&request.full_name);
        let element = Element::from_year(year);

        LuckyReading {
            name_number,
            element,
            stem: HeavenlyStem::from_year(year),
            branch: EarthlyBranch::from_year(year),
            lucky_numbers: lucky_numbers(name_number, year, request.gender, element),
        }
    }
}

/// Builds the ordered lucky-number sequence.
///
/// Candidates are the name number, the name/year combination, the element's
/// four numbers, five gender numbers and the age number. Duplicates are
/// dropped keeping the first occurrence, the list is cut to seven entries and
/// anything above 99 folds back into range. A zero name number (no letters in
/// the name) is skipped.
pub fn lucky_numbers(name_number: u32, year: i32, gender: Gender, element: Element) -> Vec<u8> {
    let year_digit = year.rem_euclid(10) as u32;

    let mut candidates = Vec::with_capacity(12);
    candidates.push(name_number);
    candidates.push(non_zero_or((name_number + year_digit) % 10, 10));
    candidates.extend(element.lucky_numbers());
    candidates.extend(match gender {
        Gender::Male => MALE_NUMBERS,
        Gender::Female => FEMALE_NUMBERS,
    });
    candidates.push(age_number(year));

    let mut unique: Vec<u32> = Vec::with_capacity(MAX_LUCKY_NUMBERS);
    for n in candidates {
        if n == 0 || unique.contains(&n) {
            continue;
        }
        unique.push(n);
        if unique.len() == MAX_LUCKY_NUMBERS {
            break;
        }
    }

    unique.into_iter().map(clamp_lucky_value).collect()
}

/// `(year mod 100) mod 9`, with 0 replaced by 9.
pub fn age_number(year: i32) -> u32 {
    non_zero_or((year.rem_euclid(100) % 9) as u32, 9)
}

fn clamp_lucky_value(n: u32) -> u8 {
    let n = if n > MAX_LUCKY_VALUE {
        non_zero_or(n % MAX_LUCKY_VALUE, MAX_LUCKY_VALUE)
    } else {
        n
    };
    // n <= 99 here
    n as u8
}

fn non_zero_or(n: u32, fallback: u32) -> u32 {
    if n == 0 {
        fallback
    } else {
        n
    }
}
