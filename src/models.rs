use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// ISO3 codes of Russia and the countries sharing a land or maritime border with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CountryCode {
    Rus,
    Nor,
    Fin,
    Est,
    Lva,
    Ltu,
    Blr,
    Ukr,
    Geo,
    Aze,
    Kaz,
    Chn,
    Mng,
    Prk,
}

impl CountryCode {
    pub const ALL: [CountryCode; 14] = [
        CountryCode::Rus,
        CountryCode::Nor,
        CountryCode::Fin,
        CountryCode::Est,
        CountryCode::Lva,
        CountryCode::Ltu,
        CountryCode::Blr,
        CountryCode::Ukr,
        CountryCode::Geo,
        CountryCode::Aze,
        CountryCode::Kaz,
        CountryCode::Chn,
        CountryCode::Mng,
        CountryCode::Prk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Rus => "RUS",
            CountryCode::Nor => "NOR",
            CountryCode::Fin => "FIN",
            CountryCode::Est => "EST",
            CountryCode::Lva => "LVA",
            CountryCode::Ltu => "LTU",
            CountryCode::Blr => "BLR",
            CountryCode::Ukr => "UKR",
            CountryCode::Geo => "GEO",
            CountryCode::Aze => "AZE",
            CountryCode::Kaz => "KAZ",
            CountryCode::Chn => "CHN",
            CountryCode::Mng => "MNG",
            CountryCode::Prk => "PRK",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country code: {0}")]
pub struct UnknownCountryCode(pub String);

impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        CountryCode::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| UnknownCountryCode(s.to_string()))
    }
}

/// The `date` field of an API entry. The provider sends a string ("2021"),
/// hand-built fixtures sometimes use a bare integer; both are accepted here and
/// validated later during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawYear {
    Text(String),
    Number(i64),
}

impl RawYear {
    /// Parse into a calendar year, `None` when the value is not an integer.
    pub fn parse(&self) -> Option<i32> {
        match self {
            RawYear::Text(s) => s.trim().parse::<i32>().ok(),
            RawYear::Number(n) => i32::try_from(*n).ok(),
        }
    }
}

impl fmt::Display for RawYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawYear::Text(s) => write!(f, "{s:?}"),
            RawYear::Number(n) => write!(f, "{n}"),
        }
    }
}

impl<'de> Deserialize<'de> for RawYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct RawYearVisitor;

        impl<'de> Visitor<'de> for RawYearVisitor {
            type Value = RawYear;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a string or integer year")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(v)
                    .map(RawYear::Number)
                    .map_err(|_| E::custom("year out of range"))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RawYear::Number(v))
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RawYear::Text(s.to_string()))
            }
        }

        deserializer.deserialize_any(RawYearVisitor)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeName {
    #[serde(default)]
    pub value: Option<String>,
}

/// Raw entry from the API (position 1 array). Only the fields the analysis
/// reads are kept; everything is optional so that validation happens in
/// `extract` rather than inside serde.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub country: Option<CodeName>,
    #[serde(default)]
    pub date: Option<RawYear>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// One observation: a country's military expenditure (% of GDP) in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenditureRecord {
    pub country: String,
    pub year: i32,
    pub expenditure: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Display color of an event marker, kept with its CSS name for legends and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventColor {
    pub name: &'static str,
    pub rgb: Rgb8,
}

/// A historical milestone drawn on the chart and used as a pivot for impact analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub year: i32,
    pub name: &'static str,
    pub color: EventColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_round_trips_through_str() {
        for code in CountryCode::ALL {
            assert_eq!(code.as_str().parse::<CountryCode>().unwrap(), code);
        }
        assert_eq!("ukr".parse::<CountryCode>().unwrap(), CountryCode::Ukr);
        assert!("DEU".parse::<CountryCode>().is_err());
    }

    #[test]
    fn entry_accepts_string_or_number_date() {
        let e: Entry = serde_json::from_str(
            r#"{"country":{"id":"UA","value":"Ukraine"},"date":"2021","value":3.2}"#,
        )
        .unwrap();
        assert_eq!(e.date.as_ref().and_then(RawYear::parse), Some(2021));

        let e: Entry = serde_json::from_str(r#"{"country":{"value":"Ukraine"},"date":2020}"#)
            .unwrap();
        assert_eq!(e.date.as_ref().and_then(RawYear::parse), Some(2020));
        assert_eq!(e.value, None);
    }

    #[test]
    fn raw_year_rejects_non_integer_text() {
        assert_eq!(RawYear::Text("20x1".into()).parse(), None);
        assert_eq!(RawYear::Text(" 2019 ".into()).parse(), Some(2019));
    }
}
