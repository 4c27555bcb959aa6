//! Fixed lookup tables: letter digits, the five elements, the ten heavenly
//! stems and the twelve earthly branches.
//!
//! All tables are `const` data; nothing here allocates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numerology digit for a lowercase letter of the Vietnamese alphabet.
///
/// Only the bare Latin letters plus `ă â đ ê ô ơ ư` are recognised; letters
/// carrying tone marks return `None`.
pub const fn letter_digit(c: char) -> Option<u8> {
    let digit = match c {
        'a' | 'ă' | 'â' | 'i' | 'r' => 1,
        'b' | 'j' | 's' => 2,
        'c' | 'k' | 't' => 3,
        'd' | 'l' | 'u' | 'ư' => 4,
        'đ' | 'm' | 'v' => 5,
        'e' | 'ê' | 'n' | 'w' => 6,
        'f' | 'o' | 'ô' | 'ơ' | 'x' => 7,
        'g' | 'p' | 'y' => 8,
        'h' | 'q' | 'z' => 9,
        _ => return None,
    };
    Some(digit)
}

/// Ngũ hành.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Kim,
    #[serde(rename = "Mộc")]
    Moc,
    #[serde(rename = "Thủy")]
    Thuy,
    #[serde(rename = "Hỏa")]
    Hoa,
    #[serde(rename = "Thổ")]
    Tho,
}

/// Element for each last digit of the birth year (index = year mod 10).
const ELEMENT_BY_YEAR_DIGIT: [Element; 10] = [
    Element::Kim,
    Element::Kim,
    Element::Thuy,
    Element::Thuy,
    Element::Moc,
    Element::Moc,
    Element::Hoa,
    Element::Hoa,
    Element::Tho,
    Element::Tho,
];

impl Element {
    pub fn from_year(year: i32) -> Self {
        ELEMENT_BY_YEAR_DIGIT[year.rem_euclid(10) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Kim => "Kim",
            Self::Moc => "Mộc",
            Self::Thuy => "Thủy",
            Self::Hoa => "Hỏa",
            Self::Tho => "Thổ",
        }
    }

    /// Personality traits used in the element description.
    pub fn traits(self) -> &'static str {
        match self {
            Self::Kim => "kiên định, mạnh mẽ, có khả năng lãnh đạo",
            Self::Moc => "sáng tạo, linh hoạt, thích khám phá",
            Self::Thuy => "thông minh, nhạy cảm, có trực giác tốt",
            Self::Hoa => "nhiệt tình, năng động, có sức ảnh hưởng",
            Self::Tho => "ổn định, đáng tin cậy, có tinh thần trách nhiệm",
        }
    }

    pub fn lucky_numbers(self) -> [u32; 4] {
        match self {
            Self::Kim => [1, 6, 7, 8],
            Self::Moc => [3, 4, 8, 9],
            Self::Thuy => [1, 2, 6, 7],
            Self::Hoa => [2, 3, 7, 9],
            Self::Tho => [2, 5, 8, 9],
        }
    }

    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Self::Kim => &["Trắng", "Bạc", "Xám"],
            Self::Moc => &["Xanh lá", "Xanh dương", "Nâu"],
            Self::Thuy => &["Đen", "Xanh dương", "Xanh lá"],
            Self::Hoa => &["Đỏ", "Cam", "Hồng"],
            Self::Tho => &["Vàng", "Nâu", "Cam"],
        }
    }

    pub fn days(self) -> &'static [&'static str] {
        match self {
            Self::Kim => &["Thứ 2", "Thứ 6"],
            Self::Moc => &["Thứ 3", "Thứ 7"],
            Self::Thuy => &["Thứ 4", "Thứ 8"],
            Self::Hoa => &["Thứ 5", "Thứ 9"],
            Self::Tho => &["Thứ 2", "Thứ 6", "Chủ nhật"],
        }
    }

    pub fn hours(self) -> &'static [&'static str] {
        match self {
            Self::Kim => &["7h-9h", "15h-17h"],
            Self::Moc => &["5h-7h", "13h-15h"],
            Self::Thuy => &["21h-23h", "3h-5h"],
            Self::Hoa => &["11h-13h", "19h-21h"],
            Self::Tho => &["9h-11h", "17h-19h"],
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::Kim => "Nên đặt vật phẩm kim loại ở hướng Tây, tránh hướng Nam để tăng vận may.",
            Self::Moc => "Trồng cây xanh ở hướng Đông, sử dụng màu xanh lá để thu hút tài lộc.",
            Self::Thuy => {
                "Đặt bể cá hoặc thác nước ở hướng Bắc, tránh hướng Nam để cân bằng âm dương."
            }
            Self::Hoa => {
                "Sử dụng đèn đỏ hoặc vật phẩm màu đỏ ở hướng Nam để tăng năng lượng tích cực."
            }
            Self::Tho => "Đặt đá phong thủy hoặc gốm sứ ở trung tâm nhà để ổn định vận khí.",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Thiên can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    #[serde(rename = "Giáp")]
    Giap,
    #[serde(rename = "Ất")]
    At,
    #[serde(rename = "Bính")]
    Binh,
    #[serde(rename = "Đinh")]
    Dinh,
    #[serde(rename = "Mậu")]
    Mau,
    #[serde(rename = "Kỷ")]
    Ky,
    Canh,
    #[serde(rename = "Tân")]
    Tan,
    #[serde(rename = "Nhâm")]
    Nham,
    #[serde(rename = "Quý")]
    Quy,
}

/// All 10 stems in cycle order (index 0 = Giáp).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Giap,
    HeavenlyStem::At,
    HeavenlyStem::Binh,
    HeavenlyStem::Dinh,
    HeavenlyStem::Mau,
    HeavenlyStem::Ky,
    HeavenlyStem::Canh,
    HeavenlyStem::Tan,
    HeavenlyStem::Nham,
    HeavenlyStem::Quy,
];

const STEM_NAMES: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

const STEM_MEANINGS: [&str; 10] = [
    "sự khởi đầu và lãnh đạo",
    "sự phát triển và mềm mại",
    "năng lượng và sức mạnh",
    "sự ổn định và kiên nhẫn",
    "sự trung thành và đáng tin cậy",
    "sự thông minh và khéo léo",
    "sự quyết đoán và mạnh mẽ",
    "sự tinh tế và nhạy cảm",
    "sự sâu sắc và trí tuệ",
    "sự hoàn thiện và viên mãn",
];

impl HeavenlyStem {
    /// Stem of a year: index `(year - 4) mod 10`, so CE 4 is Giáp.
    pub fn from_year(year: i32) -> Self {
        ALL_STEMS[(i64::from(year) - 4).rem_euclid(10) as usize]
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Giap => 0,
            Self::At => 1,
            Self::Binh => 2,
            Self::Dinh => 3,
            Self::Mau => 4,
            Self::Ky => 5,
            Self::Canh => 6,
            Self::Tan => 7,
            Self::Nham => 8,
            Self::Quy => 9,
        }
    }

    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub fn meaning(self) -> &'static str {
        STEM_MEANINGS[self.index() as usize]
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Địa chi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    #[serde(rename = "Tý")]
    Ty,
    #[serde(rename = "Sửu")]
    Suu,
    #[serde(rename = "Dần")]
    Dan,
    #[serde(rename = "Mão")]
    Mao,
    #[serde(rename = "Thìn")]
    Thin,
    #[serde(rename = "Tỵ")]
    Ti,
    #[serde(rename = "Ngọ")]
    Ngo,
    #[serde(rename = "Mùi")]
    Mui,
    #[serde(rename = "Thân")]
    Than,
    #[serde(rename = "Dậu")]
    Dau,
    #[serde(rename = "Tuất")]
    Tuat,
    #[serde(rename = "Hợi")]
    Hoi,
}

/// All 12 branches in cycle order (index 0 = Tý).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ty,
    EarthlyBranch::Suu,
    EarthlyBranch::Dan,
    EarthlyBranch::Mao,
    EarthlyBranch::Thin,
    EarthlyBranch::Ti,
    EarthlyBranch::Ngo,
    EarthlyBranch::Mui,
    EarthlyBranch::Than,
    EarthlyBranch::Dau,
    EarthlyBranch::Tuat,
    EarthlyBranch::Hoi,
];

const BRANCH_NAMES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

const BRANCH_MEANINGS: [&str; 12] = [
    "sự thông minh và nhanh nhẹn",
    "sự kiên nhẫn và chăm chỉ",
    "sự dũng cảm và lãnh đạo",
    "sự nhanh nhẹn và thông minh",
    "sự mạnh mẽ và quyền lực",
    "sự khéo léo và thông minh",
    "sự năng động và nhiệt tình",
    "sự hiền hòa và nhân từ",
    "sự thông minh và linh hoạt",
    "sự chính xác và cẩn thận",
    "sự trung thành và đáng tin",
    "sự hào phóng và tốt bụng",
];

impl EarthlyBranch {
    /// Branch of a year: index `(year - 4) mod 12`, so CE 4 is Tý.
    pub fn from_year(year: i32) -> Self {
        ALL_BRANCHES[(i64::from(year) - 4).rem_euclid(12) as usize]
    }

    /// 0-based index (Tý=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ty => 0,
            Self::Suu => 1,
            Self::Dan => 2,
            Self::Mao => 3,
            Self::Thin => 4,
            Self::Ti => 5,
            Self::Ngo => 6,
            Self::Mui => 7,
            Self::Than => 8,
            Self::Dau => 9,
            Self::Tuat => 10,
            Self::Hoi => 11,
        }
    }

    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub fn meaning(self) -> &'static str {
        BRANCH_MEANINGS[self.index() as usize]
    }
}

impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_by_year_digit() {
        assert_eq!(Element::from_year(1990), Element::Kim);
        assert_eq!(Element::from_year(1991), Element::Kim);
        assert_eq!(Element::from_year(1992), Element::Thuy);
        assert_eq!(Element::from_year(1993), Element::Thuy);
        assert_eq!(Element::from_year(1994), Element::Moc);
        assert_eq!(Element::from_year(1995), Element::Moc);
        assert_eq!(Element::from_year(1996), Element::Hoa);
        assert_eq!(Element::from_year(1997), Element::Hoa);
        assert_eq!(Element::from_year(1998), Element::Tho);
        assert_eq!(Element::from_year(1999), Element::Tho);
    }

    #[test]
    fn test_stem_and_branch_for_1990() {
        assert_eq!(HeavenlyStem::from_year(1990), HeavenlyStem::Canh);
        assert_eq!(EarthlyBranch::from_year(1990), EarthlyBranch::Ngo);
        assert_eq!(HeavenlyStem::Canh.name(), "Canh");
        assert_eq!(EarthlyBranch::Ngo.name(), "Ngọ");
    }

    #[test]
    fn test_cycles_are_periodic() {
        for year in [-2000, -1, 0, 3, 4, 1900, 1984, 2024, 2100] {
            assert_eq!(HeavenlyStem::from_year(year), HeavenlyStem::from_year(year + 10));
            assert_eq!(EarthlyBranch::from_year(year), EarthlyBranch::from_year(year + 12));
        }
    }

    #[test]
    fn test_index_matches_table_order() {
        for (i, stem) in ALL_STEMS.iter().enumerate() {
            assert_eq!(stem.index() as usize, i);
        }
        for (i, branch) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(branch.index() as usize, i);
        }
    }

    #[test]
    fn test_serde_uses_vietnamese_names() {
        assert_eq!(serde_json::to_string(&Element::Thuy).unwrap(), "\"Thủy\"");
        assert_eq!(serde_json::to_string(&HeavenlyStem::Quy).unwrap(), "\"Quý\"");
        assert_eq!(serde_json::to_string(&EarthlyBranch::Hoi).unwrap(), "\"Hợi\"");
        for stem in ALL_STEMS {
            assert_eq!(serde_json::to_value(stem).unwrap(), stem.name());
        }
        for branch in ALL_BRANCHES {
            assert_eq!(serde_json::to_value(branch).unwrap(), branch.name());
        }
    }

    #[test]
    fn test_letter_digit() {
        assert_eq!(letter_digit('a'), Some(1));
        assert_eq!(letter_digit('đ'), Some(5));
        assert_eq!(letter_digit('ơ'), Some(7));
        assert_eq!(letter_digit('z'), Some(9));
        assert_eq!(letter_digit('á'), None);
        assert_eq!(letter_digit('A'), None);
        assert_eq!(letter_digit(' '), None);
    }
}
