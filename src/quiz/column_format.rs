use std::fmt;

use rand::Rng;

/// One of the three vocabulary table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Hanzi,
    Pinyin,
    English,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Hanzi, Column::Pinyin, Column::English];

    /// Position in a per-row `[hanzi, pinyin, english]` triple.
    pub fn index(&self) -> usize {
        match self {
            Column::Hanzi => 0,
            Column::Pinyin => 1,
            Column::English => 2,
        }
    }
}

/// Which columns a quiz shows and which one starts blank. Directional
/// formats fix the blank column; random formats pick it per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnFormat {
    #[default]
    RandomHanziPinyinEnglish,
    RandomHanziEnglish,
    RandomPinyinEnglish,
    HanziToEnglish,
    PinyinToEnglish,
    EnglishToHanzi,
    EnglishToPinyin,
    HanziToPinyin,
}

/// How one cell starts out when a row is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    Prefilled,
    Blank,
    NotShown,
}

impl ColumnFormat {
    /// Every format, in the order a driver's selector should list them.
    pub const ALL: [ColumnFormat; 8] = [
        ColumnFormat::RandomHanziPinyinEnglish,
        ColumnFormat::RandomHanziEnglish,
        ColumnFormat::RandomPinyinEnglish,
        ColumnFormat::HanziToEnglish,
        ColumnFormat::PinyinToEnglish,
        ColumnFormat::EnglishToHanzi,
        ColumnFormat::EnglishToPinyin,
        ColumnFormat::HanziToPinyin,
    ];

    pub fn shows(&self, column: Column) -> bool {
        match column {
            Column::Hanzi => matches!(
                self,
                ColumnFormat::RandomHanziPinyinEnglish
                    | ColumnFormat::RandomHanziEnglish
                    | ColumnFormat::HanziToEnglish
                    | ColumnFormat::EnglishToHanzi
                    | ColumnFormat::HanziToPinyin
            ),
            Column::Pinyin => matches!(
                self,
                ColumnFormat::RandomHanziPinyinEnglish
                    | ColumnFormat::RandomPinyinEnglish
                    | ColumnFormat::PinyinToEnglish
                    | ColumnFormat::EnglishToPinyin
                    | ColumnFormat::HanziToPinyin
            ),
            Column::English => !matches!(self, ColumnFormat::HanziToPinyin),
        }
    }

    pub fn visible_column_count(&self) -> usize {
        Column::ALL.iter().filter(|&&column| self.shows(column)).count()
    }

    /// Initial fill for the `[hanzi, pinyin, english]` triple of one row.
    /// Exactly one visible column is `Prefilled` and the rest of the
    /// visible columns are `Blank`; random formats choose the prefilled
    /// column uniformly on every call.
    pub fn initial_fill_plan(&self) -> [CellFill; 3] {
        use CellFill::{Blank, NotShown, Prefilled};

        match self {
            ColumnFormat::HanziToEnglish => [Prefilled, NotShown, Blank],
            ColumnFormat::PinyinToEnglish => [NotShown, Prefilled, Blank],
            ColumnFormat::EnglishToHanzi => [Blank, NotShown, Prefilled],
            ColumnFormat::EnglishToPinyin => [NotShown, Blank, Prefilled],
            ColumnFormat::HanziToPinyin => [Prefilled, Blank, NotShown],
            ColumnFormat::RandomHanziEnglish => {
                if rand::rng().random_range(0..2) == 0 {
                    [Prefilled, NotShown, Blank]
                } else {
                    [Blank, NotShown, Prefilled]
                }
            }
            ColumnFormat::RandomPinyinEnglish => {
                if rand::rng().random_range(0..2) == 0 {
                    [NotShown, Prefilled, Blank]
                } else {
                    [NotShown, Blank, Prefilled]
                }
            }
            ColumnFormat::RandomHanziPinyinEnglish => {
                let mut plan = [Blank; 3];
                plan[rand::rng().random_range(0..3)] = Prefilled;
                plan
            }
        }
    }
}

impl fmt::Display for ColumnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            ColumnFormat::RandomHanziPinyinEnglish => "Random: Hanzi, Pinyin, and English",
            ColumnFormat::RandomHanziEnglish => "Random: Hanzi and English",
            ColumnFormat::RandomPinyinEnglish => "Random: Pinyin and English",
            ColumnFormat::HanziToEnglish => "Hanzi to English",
            ColumnFormat::PinyinToEnglish => "Pinyin to English",
            ColumnFormat::EnglishToHanzi => "English to Hanzi",
            ColumnFormat::EnglishToPinyin => "English to Pinyin",
            ColumnFormat::HanziToPinyin => "Hanzi to Pinyin",
        };
        write!(f, "{}", title)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellFill, Column, ColumnFormat};

    #[test]
    fn fill_plan_marks_exactly_one_visible_column_prefilled() {
        for format in ColumnFormat::ALL {
            // Random formats redraw every call; sample enough to hit
            // every branch.
            for _ in 0..50 {
                let plan = format.initial_fill_plan();

                let prefilled =
                    plan.iter().filter(|&&fill| fill == CellFill::Prefilled).count();
                assert_eq!(prefilled, 1, "{}", format);

                for column in Column::ALL {
                    let fill = plan[column.index()];
                    assert_eq!(
                        fill != CellFill::NotShown,
                        format.shows(column),
                        "{} / {:?}",
                        format,
                        column
                    );
                }
            }
        }
    }

    #[test]
    fn visible_column_counts() {
        for format in ColumnFormat::ALL {
            let expected = match format {
                ColumnFormat::RandomHanziPinyinEnglish => 3,
                _ => 2,
            };
            assert_eq!(format.visible_column_count(), expected, "{}", format);
        }
    }

    #[test]
    fn english_is_visible_except_hanzi_to_pinyin() {
        for format in ColumnFormat::ALL {
            let expected = format != ColumnFormat::HanziToPinyin;
            assert_eq!(format.shows(Column::English), expected, "{}", format);
        }
    }

    #[test]
    fn default_format_shows_all_three_columns() {
        assert_eq!(ColumnFormat::default(), ColumnFormat::RandomHanziPinyinEnglish);
        assert_eq!(ColumnFormat::default().visible_column_count(), 3);
    }
}
