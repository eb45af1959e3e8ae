use serde::{Deserialize, Serialize};

/// Decimal separator and grouping convention for generated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl LabelLocale {
    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }

    fn grouping_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }
}

/// Maximum fraction digits for a given visible y-span.
///
/// Narrow spans need more digits to keep adjacent labels distinct.
#[must_use]
pub fn max_fraction_digits_for_span(span: f64) -> usize {
    if span < 0.1 {
        6
    } else if span < 1.0 {
        4
    } else if span < 20.0 {
        3
    } else if span < 100.0 {
        1
    } else {
        0
    }
}

/// Numeric label formatter with precision fixed at construction.
///
/// The owning chart memoizes one instance per y-range and reuses it for both
/// axes until a zoom (or an explicit call) invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFormatter {
    precision: usize,
    locale: LabelLocale,
}

impl LabelFormatter {
    #[must_use]
    pub fn for_span(span: f64, locale: LabelLocale) -> Self {
        Self {
            precision: max_fraction_digits_for_span(span),
            locale,
        }
    }

    #[must_use]
    pub fn with_precision(precision: usize, locale: LabelLocale) -> Self {
        Self { precision, locale }
    }

    #[must_use]
    pub fn precision(self) -> usize {
        self.precision
    }

    /// Formats with at most `precision` fraction digits: trailing zeros are
    /// trimmed and thousands grouping follows the locale.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{value}");
        }

        let text = format!("{value:.precision$}", precision = self.precision);
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (text.as_str(), ""),
        };
        let (sign, digits) = int_part
            .strip_prefix('-')
            .map_or(("", int_part), |rest| ("-", rest));

        let mut out = String::with_capacity(text.len() + digits.len() / 3);
        out.push_str(sign);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.locale.grouping_separator());
            }
            out.push(digit);
        }
        if !frac_part.is_empty() {
            out.push(self.locale.decimal_separator());
            out.push_str(frac_part);
        }
        out
    }
}
