use chrono::Month;

use super::types::{PlayerProfile, RawRecord, MIN_FIELDS};
use crate::error::{Error, Result};

/// Map a two-digit month token ("01".."12") to its long English name.
pub fn month_name(token: &str) -> Result<&'static str> {
    let valid_shape = token.len() == 2 && token.bytes().all(|b| b.is_ascii_digit());
    if !valid_shape {
        return Err(Error::Format(format!("invalid month token `{}`", token)));
    }
    let number: u8 = token
        .parse()
        .map_err(|_| Error::Format(format!("invalid month token `{}`", token)))?;
    Month::try_from(number)
        .map(|m| m.name())
        .map_err(|_| Error::Format(format!("month `{}` out of range", token)))
}

/// The Lahman export writes months unpadded ("2"); bring single digits up to two.
fn pad_month_token(token: &str) -> String {
    if token.len() == 1 && token.bytes().all(|b| b.is_ascii_digit()) {
        format!("0{}", token)
    } else {
        token.to_string()
    }
}

/// `<base>/players/<first char of id>/<id>.<ext>`
pub fn profile_url(base_url: &str, reference_id: &str, ext: &str) -> Result<String> {
    let initial = reference_id
        .chars()
        .next()
        .ok_or_else(|| Error::Format("empty reference id".to_string()))?;
    Ok(format!(
        "{}/players/{}/{}.{}",
        base_url.trim_end_matches('/'),
        initial,
        reference_id,
        ext
    ))
}

/// Build a profile from one dataset row. No network access.
pub fn normalize(record: &RawRecord, base_url: &str, ext: &str) -> Result<PlayerProfile> {
    if record.width() < MIN_FIELDS {
        return Err(Error::Format(format!(
            "record has {} fields, expected at least {}",
            record.width(),
            MIN_FIELDS
        )));
    }

    let reference_id = record.reference_id().trim().to_string();
    let profile_url = profile_url(base_url, &reference_id, ext)?;
    let birth_month = month_name(&pad_month_token(record.birth_month().trim()))?.to_string();

    Ok(PlayerProfile {
        given_name: record.given_name().to_string(),
        surname: record.surname().to_string(),
        birth_year: record.birth_year().to_string(),
        birth_month,
        birth_day: record.birth_day().to_string(),
        reference_id,
        profile_url,
        image_url: None,
        position: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.baseball-reference.com";

    fn aaron() -> RawRecord {
        let mut values = vec![String::new(); 24];
        values[0] = "aaronha01".into();
        values[1] = "1934".into();
        values[2] = "02".into();
        values[3] = "05".into();
        values[13] = "Hank".into();
        values[14] = "Aaron".into();
        values[23] = "aaronha01".into();
        RawRecord::new(values)
    }

    #[test]
    fn test_month_names_for_all_padded_tokens() {
        let expected = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        for (i, name) in expected.iter().enumerate() {
            let token = format!("{:02}", i + 1);
            assert_eq!(month_name(&token).unwrap(), *name, "token {}", token);
        }
    }

    #[test]
    fn test_month_unpadded_token_is_rejected() {
        assert!(matches!(month_name("2"), Err(Error::Format(_))));
        assert_eq!(month_name("12").unwrap(), "December");
    }

    #[test]
    fn test_normalize_pads_unpadded_month() {
        let mut values = aaron().fields().to_vec();
        values[2] = "2".into();
        let profile = normalize(&RawRecord::new(values), BASE, "shtml").unwrap();
        assert_eq!(profile.birth_month, "February");
        assert_eq!(pad_month_token("9"), "09");
        assert_eq!(pad_month_token("11"), "11");
        assert_eq!(pad_month_token(""), "");
    }

    #[test]
    fn test_month_rejects_bad_tokens() {
        for token in ["", "00", "13", "1a", "Feb", "002", "-1", " 2"] {
            let err = month_name(token).unwrap_err();
            assert!(matches!(err, Error::Format(_)), "token {:?}", token);
        }
    }

    #[test]
    fn test_profile_url_shape() {
        assert_eq!(
            profile_url(BASE, "aaronha01", "shtml").unwrap(),
            "https://www.baseball-reference.com/players/a/aaronha01.shtml"
        );
        assert_eq!(
            profile_url("https://example.test/", "z", "shtml").unwrap(),
            "https://example.test/players/z/z.shtml"
        );
        assert!(profile_url(BASE, "", "shtml").is_err());
    }

    #[test]
    fn test_normalize_aaron() {
        let profile = normalize(&aaron(), BASE, "shtml").unwrap();
        assert_eq!(profile.given_name, "Hank");
        assert_eq!(profile.surname, "Aaron");
        assert_eq!(profile.birth_year, "1934");
        assert_eq!(profile.birth_month, "February");
        assert_eq!(profile.birth_day, "05");
        assert_eq!(profile.reference_id, "aaronha01");
        assert_eq!(
            profile.profile_url,
            "https://www.baseball-reference.com/players/a/aaronha01.shtml"
        );
        assert_eq!(profile.image_url, None);
        assert_eq!(profile.position, None);
    }

    #[test]
    fn test_normalize_rejects_short_record() {
        let rec = RawRecord::new(vec!["a".into(), "1934".into(), "02".into()]);
        assert!(matches!(normalize(&rec, BASE, "shtml"), Err(Error::Format(_))));
    }

    #[test]
    fn test_normalize_rejects_header_row() {
        let mut values: Vec<String> = (0..24).map(|i| format!("col{}", i)).collect();
        values[2] = "birthMonth".into();
        let err = normalize(&RawRecord::new(values), BASE, "shtml").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }
}
