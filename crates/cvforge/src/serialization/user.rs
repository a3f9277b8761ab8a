//! Wire forms of the personal-information fields.
//!
//! AltaCV fields serialize `{fieldName, symbol?, prefix?, value}`: the
//! symbol/prefix pair is implied for the fixed contact set and written only
//! for custom fields. AwesomeCV fields serialize `{fieldName, value,
//! valueId?}`. Decoding dispatches on `fieldName` back to the fixed
//! constructors so validation (ORCID) applies on the way in.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{altacv, awesomecv};

const FIELD_NAME: &str = "fieldName";
const SYMBOL: &str = "symbol";
const PREFIX: &str = "prefix";
const VALUE: &str = "value";
const VALUE_ID: &str = "valueId";

// ────────────────────────────────────────────────────────────────────────────
// AltaCV
// ────────────────────────────────────────────────────────────────────────────

impl Serialize for altacv::UserInfoField {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(FIELD_NAME, &self.field_name)?;
        if !self.is_well_known() {
            map.serialize_entry(SYMBOL, &self.symbol)?;
            map.serialize_entry(PREFIX, &self.prefix)?;
        }
        map.serialize_entry(VALUE, &self.value)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for altacv::UserInfoField {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawField {
            field_name: String,
            symbol: Option<String>,
            prefix: Option<String>,
            #[serde(default)]
            value: String,
        }

        let raw = RawField::deserialize(deserializer)?;
        match raw.field_name.as_str() {
            "email" => Ok(altacv::UserInfoField::email(raw.value)),
            "phone" => Ok(altacv::UserInfoField::phone(raw.value)),
            "mailaddress" => Ok(altacv::UserInfoField::mail_address(raw.value)),
            "location" => Ok(altacv::UserInfoField::location(raw.value)),
            "homepage" => Ok(altacv::UserInfoField::home_page(raw.value)),
            "twitter" => Ok(altacv::UserInfoField::twitter(raw.value)),
            "linkedin" => Ok(altacv::UserInfoField::linkedin(raw.value)),
            "github" => Ok(altacv::UserInfoField::github(raw.value)),
            "orcid" => altacv::UserInfoField::orcid(raw.value).map_err(serde::de::Error::custom),
            _ => {
                let missing = |key: &str| {
                    serde::de::Error::custom(format!(
                        "custom field \"{}\" is missing its \"{key}\"",
                        raw.field_name
                    ))
                };
                let symbol = raw.symbol.ok_or_else(|| missing(SYMBOL))?;
                let prefix = raw.prefix.ok_or_else(|| missing(PREFIX))?;
                Ok(altacv::UserInfoField::custom(raw.field_name, symbol, prefix, raw.value))
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AwesomeCV
// ────────────────────────────────────────────────────────────────────────────

impl Serialize for awesomecv::UserInfoField {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(FIELD_NAME, &self.field_name)?;
        map.serialize_entry(VALUE, &self.value)?;
        if let Some(value_id) = &self.value_id {
            map.serialize_entry(VALUE_ID, value_id)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for awesomecv::UserInfoField {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawField {
            field_name: String,
            #[serde(default)]
            value: String,
            value_id: Option<String>,
        }

        let raw = RawField::deserialize(deserializer)?;
        let field = match raw.field_name.as_str() {
            "position" => awesomecv::UserInfoField::position(raw.value),
            "address" => awesomecv::UserInfoField::mail_address(raw.value),
            "mobile" => awesomecv::UserInfoField::phone(raw.value),
            "email" => awesomecv::UserInfoField::email(raw.value),
            "homepage" => awesomecv::UserInfoField::home_page(raw.value),
            "github" => awesomecv::UserInfoField::github(raw.value),
            "linkedin" => awesomecv::UserInfoField::linkedin(raw.value),
            "gitlab" => awesomecv::UserInfoField::gitlab(raw.value),
            "twitter" => awesomecv::UserInfoField::twitter(raw.value),
            "skype" => awesomecv::UserInfoField::skype(raw.value),
            "reddit" => awesomecv::UserInfoField::reddit(raw.value),
            "medium" => awesomecv::UserInfoField::medium(raw.value),
            "extrainfo" => awesomecv::UserInfoField::extra_info(raw.value),
            "stackoverflow" => {
                let value_id = raw.value_id.ok_or_else(|| {
                    serde::de::Error::custom("stackoverflow field is missing its \"valueId\"")
                })?;
                awesomecv::UserInfoField::stack_overflow(value_id, raw.value)
            }
            "googlescholar" => {
                let value_id = raw.value_id.ok_or_else(|| {
                    serde::de::Error::custom("googlescholar field is missing its \"valueId\"")
                })?;
                awesomecv::UserInfoField::google_scholar(value_id, raw.value)
            }
            other => {
                return Err(serde::de::Error::custom(format!("unknown user info field: {other}")));
            }
        };

        Ok(field)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::domain::{altacv, awesomecv};

    fn to_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap()
    }

    // ── AltaCV ──────────────────────────────────────────────────────────────

    #[test]
    fn test_well_known_fields_omit_symbol_and_prefix() {
        let cases = [
            (altacv::UserInfoField::email("your_name@email.com"), r#"{"fieldName":"email","value":"your_name@email.com"}"#),
            (altacv::UserInfoField::phone("000-00-0000"), r#"{"fieldName":"phone","value":"000-00-0000"}"#),
            (altacv::UserInfoField::location("Location, Country"), r#"{"fieldName":"location","value":"Location, Country"}"#),
            (altacv::UserInfoField::home_page("www.homepage.com"), r#"{"fieldName":"homepage","value":"www.homepage.com"}"#),
            (altacv::UserInfoField::twitter("@twitterhandle"), r#"{"fieldName":"twitter","value":"@twitterhandle"}"#),
            (altacv::UserInfoField::github("your_id"), r#"{"fieldName":"github","value":"your_id"}"#),
            (altacv::UserInfoField::linkedin("your_id"), r#"{"fieldName":"linkedin","value":"your_id"}"#),
            (
                altacv::UserInfoField::orcid("0000-0000-0000-0000").unwrap(),
                r#"{"fieldName":"orcid","value":"0000-0000-0000-0000"}"#,
            ),
        ];

        for (field, expected) in cases {
            assert_eq!(to_json(&field), expected);
        }
    }

    #[test]
    fn test_custom_field_serializes_all_four_attributes() {
        let gitlab = altacv::UserInfoField::custom("gitlab", "\\faGitlab", "https://gitlab.com/", "your_id");
        assert_eq!(
            to_json(&gitlab),
            r#"{"fieldName":"gitlab","symbol":"\\faGitlab","prefix":"https://gitlab.com/","value":"your_id"}"#
        );
    }

    #[test]
    fn test_altacv_field_decoding_dispatches_on_field_name() {
        let decoded: altacv::UserInfoField =
            serde_json::from_str(r#"{"fieldName":"email","value":"your_name@email.com"}"#).unwrap();
        assert_eq!(decoded, altacv::UserInfoField::email("your_name@email.com"));

        let decoded: altacv::UserInfoField = serde_json::from_str(
            r#"{"fieldName":"gitlab","symbol":"\\faGitlab","prefix":"https://gitlab.com/","value":"your_id"}"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            altacv::UserInfoField::custom("gitlab", "\\faGitlab", "https://gitlab.com/", "your_id")
        );
    }

    #[test]
    fn test_altacv_orcid_is_validated_on_decode() {
        let err = serde_json::from_str::<altacv::UserInfoField>(r#"{"fieldName":"orcid","value":"0000"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid ORCID: 0000"), "got: {err}");
    }

    #[test]
    fn test_altacv_custom_field_requires_symbol_and_prefix() {
        let err = serde_json::from_str::<altacv::UserInfoField>(r#"{"fieldName":"mastodon","value":"@me"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing its \"symbol\""), "got: {err}");
    }

    #[test]
    fn test_altacv_user_round_trip() {
        let user = altacv::UserInfo::new(
            "John Doe",
            vec![
                altacv::UserInfoField::email("your_name@email.com"),
                altacv::UserInfoField::phone("000-00-0000"),
            ],
        );

        let json = to_json(&user);
        assert_eq!(
            json,
            r#"{"name":"John Doe","personalInfo":[{"fieldName":"email","value":"your_name@email.com"},{"fieldName":"phone","value":"000-00-0000"}]}"#
        );

        let decoded: altacv::UserInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, user);
    }

    // ── AwesomeCV ───────────────────────────────────────────────────────────

    #[test]
    fn test_awesomecv_field_wire_form() {
        let email = awesomecv::UserInfoField::email("me@example.com");
        assert_eq!(to_json(&email), r#"{"fieldName":"email","value":"me@example.com"}"#);

        let so = awesomecv::UserInfoField::stack_overflow("4567", "my-name");
        assert_eq!(
            to_json(&so),
            r#"{"fieldName":"stackoverflow","value":"my-name","valueId":"4567"}"#
        );
    }

    #[test]
    fn test_awesomecv_field_round_trip_with_value_id() {
        let scholar = awesomecv::UserInfoField::google_scholar("abc123", "My Name");
        let json = to_json(&scholar);
        let decoded: awesomecv::UserInfoField = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, scholar);
    }

    #[test]
    fn test_awesomecv_unknown_field_is_rejected() {
        let err = serde_json::from_str::<awesomecv::UserInfoField>(r#"{"fieldName":"pager","value":"1"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown user info field: pager"), "got: {err}");
    }

    #[test]
    fn test_awesomecv_id_field_requires_value_id() {
        let err = serde_json::from_str::<awesomecv::UserInfoField>(
            r#"{"fieldName":"stackoverflow","value":"my-name"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing its \"valueId\""), "got: {err}");
    }
}
