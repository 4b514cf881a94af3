//! Submission and edit input, validated into observations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::observation::{Author, Observation};
use crate::error::DomainError;

/// Image file attached to a draft. Only metadata; bytes live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub url: Option<String>,
}

impl ImageAttachment {
    fn ensure_image(&self) -> Result<(), DomainError> {
        if is_image_media_type(&self.content_type) {
            Ok(())
        } else {
            Err(DomainError::UnsupportedMedia(format!(
                "{} ({})",
                self.file_name, self.content_type
            )))
        }
    }
}

/// Whether a MIME type names an image (`image/*`).
pub fn is_image_media_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}

/// A not-yet-validated observation as submitted from the upload form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationDraft {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub date: Option<String>,
    pub image: Option<ImageAttachment>,
}

impl ObservationDraft {
    /// Validate the draft and turn it into an observation posted at `now`.
    ///
    /// A non-image attachment is rejected before field validation runs.
    /// Field problems are collected and reported together.
    pub fn into_observation(
        self,
        author: Author,
        now: DateTime<Utc>,
    ) -> Result<Observation, DomainError> {
        if let Some(image) = &self.image {
            image.ensure_image()?;
        }

        let mut errors = Vec::new();
        let title = required_text(&self.title, "title", &mut errors);
        let description = required_text(&self.description, "description", &mut errors);
        let category = match non_blank(self.category.as_deref()) {
            None => {
                errors.push("category is required".to_string());
                None
            }
            Some(name) => parse_category(name, &mut errors),
        };
        let observed_at = non_blank(self.date.as_deref())
            .and_then(|raw| parse_observation_date(raw, now, &mut errors));

        let (title, description, category) = match (title, description, category) {
            (Some(t), Some(d), Some(c)) if errors.is_empty() => (t, d, c),
            _ => return Err(DomainError::Validation(errors)),
        };

        let mut observation = Observation::new(title, description, category, author, now);
        observation.location = non_blank(self.location.as_deref()).map(str::to_string);
        observation.observed_at = observed_at;
        observation.image = self.image.and_then(|image| image.url);
        Ok(observation)
    }
}

/// Partial edit of an existing observation. `None` leaves a field untouched;
/// a blank `location` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl ObservationPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.location.is_none()
    }

    /// Check every field, reporting all problems together.
    pub fn validate(self) -> Result<ObservationEdit, DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(vec!["no fields to update".to_string()]));
        }

        let mut errors = Vec::new();
        let title = self
            .title
            .as_deref()
            .and_then(|t| required_text(t, "title", &mut errors));
        let description = self
            .description
            .as_deref()
            .and_then(|d| required_text(d, "description", &mut errors));
        let category = self
            .category
            .as_deref()
            .and_then(|c| parse_category(c, &mut errors));

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(ObservationEdit {
            title,
            description,
            category,
            location: self
                .location
                .map(|l| non_blank(Some(l.as_str())).map(str::to_string)),
        })
    }
}

/// A validated [`ObservationPatch`], ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationEdit {
    title: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    location: Option<Option<String>>,
}

impl ObservationEdit {
    /// Write the edited fields and bump `updated_at`.
    pub fn apply_to(self, observation: &mut Observation, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            observation.title = title;
        }
        if let Some(description) = self.description {
            observation.description = description;
        }
        if let Some(category) = self.category {
            observation.category = category;
        }
        if let Some(location) = self.location {
            observation.location = location;
        }
        observation.updated_at = now;
    }
}

pub(super) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(super) fn required_text(value: &str, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match non_blank(Some(value)) {
        Some(v) => Some(v.to_string()),
        None => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

fn parse_category(name: &str, errors: &mut Vec<String>) -> Option<Category> {
    match name.parse::<Category>() {
        Ok(category) => Some(category),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    }
}

fn parse_observation_date(
    raw: &str,
    now: DateTime<Utc>,
    errors: &mut Vec<String>,
) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|d| d.and_utc())
        });

    match parsed {
        Some(date) if date > now => {
            errors.push("date cannot be in the future".to_string());
            None
        }
        Some(date) => Some(date),
        None => {
            errors.push(format!("date '{raw}' is not a valid date"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 13, 6, 0, 0).unwrap()
    }

    fn author() -> Author {
        Author::new("Alex Johnson", None)
    }

    fn draft() -> ObservationDraft {
        ObservationDraft {
            title: "Perseids from the back yard".to_string(),
            description: "Forty meteors in an hour.".to_string(),
            category: Some("meteor".to_string()),
            location: Some("  Colorado, USA ".to_string()),
            date: Some("2024-08-12".to_string()),
            image: None,
        }
    }

    #[test]
    fn accepts_complete_draft() {
        let obs = draft().into_observation(author(), now()).unwrap();
        assert_eq!(obs.title, "Perseids from the back yard");
        assert_eq!(obs.category, Category::Meteor);
        assert_eq!(obs.location.as_deref(), Some("Colorado, USA"));
        assert_eq!(
            obs.observed_at,
            Some(Utc.with_ymd_and_hms(2024, 8, 12, 0, 0, 0).unwrap())
        );
        assert_eq!(obs.created_at, now());
        assert_eq!(obs.author.name, "Alex Johnson");
    }

    #[test]
    fn accepts_rfc3339_dates() {
        let mut d = draft();
        d.date = Some("2024-08-12T03:30:00-06:00".to_string());
        let obs = d.into_observation(author(), now()).unwrap();
        assert_eq!(
            obs.observed_at,
            Some(Utc.with_ymd_and_hms(2024, 8, 12, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        match d.into_observation(author(), now()) {
            Err(DomainError::Validation(errors)) => {
                assert_eq!(errors, vec!["title is required".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn reports_every_missing_field() {
        let d = ObservationDraft::default();
        match d.into_observation(author(), now()) {
            Err(DomainError::Validation(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        "title is required".to_string(),
                        "description is required".to_string(),
                        "category is required".to_string(),
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category_and_bad_date() {
        let mut d = draft();
        d.category = Some("Asteroid".to_string());
        d.date = Some("last tuesday".to_string());
        match d.into_observation(author(), now()) {
            Err(DomainError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("Asteroid"));
                assert!(errors[1].contains("last tuesday"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_future_dates() {
        let mut d = draft();
        d.date = Some("2030-01-01".to_string());
        assert!(matches!(
            d.into_observation(author(), now()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_image_attachment() {
        let mut d = draft();
        d.image = Some(ImageAttachment {
            file_name: "notes.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            url: None,
        });
        assert!(matches!(
            d.into_observation(author(), now()),
            Err(DomainError::UnsupportedMedia(_))
        ));
    }

    #[test]
    fn keeps_image_url_of_valid_attachment() {
        let mut d = draft();
        d.image = Some(ImageAttachment {
            file_name: "perseids.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            url: Some("/uploads/perseids.jpg".to_string()),
        });
        let obs = d.into_observation(author(), now()).unwrap();
        assert_eq!(obs.image.as_deref(), Some("/uploads/perseids.jpg"));
    }

    #[test]
    fn image_media_types() {
        assert!(is_image_media_type("image/png"));
        assert!(is_image_media_type(" IMAGE/JPEG"));
        assert!(!is_image_media_type("image/"));
        assert!(!is_image_media_type("video/mp4"));
        assert!(!is_image_media_type(""));
    }

    #[test]
    fn patch_updates_only_given_fields() {
        let mut obs = draft().into_observation(author(), now()).unwrap();
        let later = now() + chrono::Duration::hours(1);
        let patch = ObservationPatch {
            title: Some("Perseid peak".to_string()),
            location: Some("".to_string()),
            ..Default::default()
        };
        patch.validate().unwrap().apply_to(&mut obs, later);

        assert_eq!(obs.title, "Perseid peak");
        assert_eq!(obs.description, "Forty meteors in an hour.");
        assert_eq!(obs.location, None);
        assert_eq!(obs.updated_at, later);
        assert_eq!(obs.created_at, now());
    }

    #[test]
    fn invalid_patch_is_rejected_as_a_whole() {
        let patch = ObservationPatch {
            title: Some("New title".to_string()),
            category: Some("Quasar".to_string()),
            ..Default::default()
        };
        match patch.validate() {
            Err(DomainError::Validation(errors)) => {
                assert_eq!(errors, vec!["unknown category 'Quasar'".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_patch_is_rejected() {
        assert!(matches!(
            ObservationPatch::default().validate(),
            Err(DomainError::Validation(_))
        ));
    }
}
