//! JSON and YAML round-tripping for resumes and their parts.
//!
//! The interesting rules live in [`content`] (the `{type, content?}` wrapper
//! codec) and [`user`] (conditional user-field forms); this module adds the
//! document-level entry points.

pub mod content;
pub mod user;

pub use content::{decode_content, decode_contents, encode_content, encode_contents};

use tracing::debug;

use crate::domain::altacv::AltaCVResume;
use crate::domain::awesomecv::AwesomeCVResume;
use crate::errors::Result;

impl AltaCVResume {
    /// Decodes a resume from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self> {
        let resume: AltaCVResume = serde_json::from_str(json)?;
        debug!(sections = resume.sections.len(), "decoded AltaCV resume from JSON");
        Ok(resume)
    }

    /// Decodes a resume from its YAML document form.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let resume: AltaCVResume = serde_yaml::from_str(yaml)?;
        debug!(sections = resume.sections.len(), "decoded AltaCV resume from YAML");
        Ok(resume)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl AwesomeCVResume {
    /// Decodes a resume from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self> {
        let resume: AwesomeCVResume = serde_json::from_str(json)?;
        debug!(sections = resume.sections.len(), "decoded AwesomeCV resume from JSON");
        Ok(resume)
    }

    /// Decodes a resume from its YAML document form.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let resume: AwesomeCVResume = serde_yaml::from_str(yaml)?;
        debug!(sections = resume.sections.len(), "decoded AwesomeCV resume from YAML");
        Ok(resume)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::altacv::{AltaCVConfig, AltaCVHeader, AltaCVResume, UserInfo, UserInfoField};
    use crate::domain::awesomecv::{AwesomeCVFooter, AwesomeCVResume};
    use crate::domain::content::SectionContent;
    use crate::domain::section::{first_column, second_column, Section};

    fn sample_contents() -> Vec<SectionContent> {
        vec![
            SectionContent::Tag("Hard-working".to_owned()),
            SectionContent::NewLine,
            SectionContent::Divider,
            SectionContent::Tag("C++".to_owned()),
        ]
    }

    #[test]
    fn test_resume_json_round_trip_is_byte_identical() {
        let resume = AltaCVResume::new(
            AltaCVConfig::default(),
            AltaCVHeader::default(),
            vec![Section::new("Strengths", first_column(1), sample_contents())],
        );

        let first = resume.to_json().unwrap();
        let decoded = AltaCVResume::from_json(&first).unwrap();

        assert_eq!(decoded.sections.len(), 1);
        assert_eq!(decoded.sections[0].contents, sample_contents());

        let second = decoded.to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resume_decoding_reads_sections() {
        let json = r#"
        {
            "sections": [
                {
                    "title": "SectionB",
                    "position": {"column": 2, "order": 3},
                    "contents": [
                        {"type": "TAG", "content": "T1"},
                        {"type": "DIVIDER"},
                        {"type": "TAG", "content": "T2"}
                    ]
                }
            ]
        }"#;

        let resume = AltaCVResume::from_json(json).unwrap();
        let section = &resume.sections[0];

        assert_eq!(section.title, "SectionB");
        assert_eq!(section.position, second_column(3));
        assert_eq!(
            section.contents,
            vec![
                SectionContent::Tag("T1".to_owned()),
                SectionContent::Divider,
                SectionContent::Tag("T2".to_owned()),
            ]
        );
        assert!(!section.ignored);
    }

    #[test]
    fn test_resume_decoding_rejects_bad_column() {
        let json = r#"{"sections":[{"title":"S","position":{"column":3,"order":1},"contents":[]}]}"#;
        let err = AltaCVResume::from_json(json).unwrap_err();
        assert!(err.to_string().contains("column position: should be 1 or 2"), "got: {err}");
    }

    #[test]
    fn test_ignored_flag_is_never_serialized() {
        let mut section = Section::new("Hidden", first_column(1), Vec::new());
        section.ignored = true;
        let resume = AltaCVResume::new(AltaCVConfig::default(), AltaCVHeader::default(), vec![section]);

        let json = resume.to_json().unwrap();
        assert!(!json.contains("ignored"), "got: {json}");

        // The flag comes back as its default, so the section renders again.
        let decoded = AltaCVResume::from_json(&json).unwrap();
        assert!(!decoded.sections[0].ignored);
    }

    #[test]
    fn test_header_user_info_round_trip() {
        let header = AltaCVHeader::new(
            "Engineer",
            Some(UserInfo::new(
                "Jane Doe",
                vec![
                    UserInfoField::email("jane@example.com"),
                    UserInfoField::custom("gitlab", "\\faGitlab", "https://gitlab.com/", "jane"),
                ],
            )),
            None,
        );
        let resume = AltaCVResume::new(AltaCVConfig::default(), header.clone(), Vec::new());

        let decoded = AltaCVResume::from_json(&resume.to_json().unwrap()).unwrap();
        assert_eq!(decoded.header, header);
    }

    #[test]
    fn test_yaml_round_trip() {
        let resume = AltaCVResume::new(
            AltaCVConfig::default(),
            AltaCVHeader::default(),
            vec![Section::new("Strengths", first_column(1), sample_contents())],
        );

        let yaml = resume.to_yaml().unwrap();
        let decoded = AltaCVResume::from_yaml(&yaml).unwrap();
        assert_eq!(decoded, resume);
    }

    #[test]
    fn test_awesomecv_resume_round_trip_keeps_footer() {
        let resume = AwesomeCVResume {
            footer: AwesomeCVFooter::new("\\today", "Jane Doe", "\\thepage"),
            sections: vec![Section::new("Experience", first_column(1), Vec::new())],
            ..AwesomeCVResume::default()
        };

        let json = resume.to_json().unwrap();
        assert!(json.contains(r#""footer":{"left":"\\today","center":"Jane Doe","right":"\\thepage"}"#));

        let decoded = AwesomeCVResume::from_json(&json).unwrap();
        assert_eq!(decoded, resume);
    }

    #[test]
    fn test_malformed_document_fails_whole_decode() {
        assert!(AltaCVResume::from_json("{not json").is_err());
        let err = AltaCVResume::from_json(r#"{"sections":[{"title":"S","position":{"column":1,"order":1},"contents":[{"content":"x"}]}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("discriminant"), "got: {err}");
    }
}
