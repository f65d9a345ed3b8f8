use crate::leads::domain::LeadRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

const CHECKED_VALUES: &[&str] = &["checked", "true", "yes", "y", "1", "x"];

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<LeadRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<AirtableRow>() {
        let row = record?;
        records.push(row.into_lead());
    }

    Ok(records)
}

/// One row of the leads table export, keyed by Airtable column names.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AirtableRow {
    #[serde(rename = "Lead Name", deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(rename = "Email", deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Phone", deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "Address", deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(rename = "City", deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    #[serde(rename = "State", deserialize_with = "empty_string_as_none")]
    state: Option<String>,
    #[serde(rename = "ZIP", deserialize_with = "empty_string_as_none")]
    zip: Option<String>,
    #[serde(rename = "Source", deserialize_with = "empty_string_as_none")]
    source: Option<String>,
    #[serde(rename = "Property Type", deserialize_with = "empty_string_as_none")]
    property_type: Option<String>,
    #[serde(rename = "Is Landlord?", deserialize_with = "empty_string_as_none")]
    is_landlord: Option<String>,
    #[serde(rename = "Property Count", deserialize_with = "empty_string_as_none")]
    property_count: Option<String>,
    #[serde(rename = "Roof Type", deserialize_with = "empty_string_as_none")]
    roof_type: Option<String>,
    #[serde(rename = "Roof Age (Years)", deserialize_with = "empty_string_as_none")]
    roof_age_years: Option<String>,
    #[serde(rename = "Shading Level", deserialize_with = "empty_string_as_none")]
    shading_level: Option<String>,
    #[serde(rename = "HOA Allows Solar?", deserialize_with = "empty_string_as_none")]
    hoa_allows_solar: Option<String>,
    #[serde(
        rename = "Distance From Bakersfield (min)",
        deserialize_with = "empty_string_as_none"
    )]
    distance_minutes: Option<String>,
    #[serde(rename = "Monthly Bill ($)", deserialize_with = "empty_string_as_none")]
    monthly_bill_raw: Option<String>,
    #[serde(rename = "True-Up Band", deserialize_with = "empty_string_as_none")]
    true_up_band: Option<String>,
    #[serde(rename = "Credit Band", deserialize_with = "empty_string_as_none")]
    credit_band: Option<String>,
    #[serde(rename = "Motivation", deserialize_with = "empty_string_as_none")]
    motivation: Option<String>,
    #[serde(rename = "Decision Style", deserialize_with = "empty_string_as_none")]
    decision_style: Option<String>,
}

impl AirtableRow {
    fn into_lead(self) -> LeadRecord {
        LeadRecord {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            source: self.source,
            property_type: self.property_type,
            is_landlord: self.is_landlord.as_deref().map(parse_checkbox),
            property_count: self.property_count.as_deref().and_then(parse_whole_number),
            roof_type: self.roof_type,
            roof_age_years: self.roof_age_years.as_deref().and_then(parse_whole_number),
            shading_level: self.shading_level,
            hoa_allows_solar: self.hoa_allows_solar,
            distance_minutes: self.distance_minutes.as_deref().and_then(parse_whole_number),
            monthly_bill_raw: self.monthly_bill_raw,
            monthly_bill: None,
            true_up_band: self.true_up_band,
            credit_band: self.credit_band,
            motivation: self.motivation,
            decision_style: self.decision_style,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_checkbox(value: &str) -> bool {
    let lowered = value.trim().to_ascii_lowercase();
    CHECKED_VALUES.contains(&lowered.as_str())
}

/// Accepts `"12"` and spreadsheet-style `"12.0"`; anything else is treated as unknown.
fn parse_whole_number(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        return Some(number);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite() && *number >= 0.0 && number.fract() == 0.0)
        .filter(|number| *number <= f64::from(u32::MAX))
        .map(|number| number as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_accepts_common_truthy_spellings() {
        for value in ["checked", "TRUE", "Yes", "1", " x "] {
            assert!(parse_checkbox(value), "value {value}");
        }
        for value in ["", "no", "false", "0", "maybe"] {
            assert!(!parse_checkbox(value), "value {value}");
        }
    }

    #[test]
    fn whole_numbers_tolerate_spreadsheet_formatting() {
        assert_eq!(parse_whole_number("12"), Some(12));
        assert_eq!(parse_whole_number(" 7.0 "), Some(7));
        assert_eq!(parse_whole_number("7.5"), None);
        assert_eq!(parse_whole_number("-3"), None);
        assert_eq!(parse_whole_number("about 20"), None);
    }
}
