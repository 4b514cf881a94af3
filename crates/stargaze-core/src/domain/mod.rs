//! Domain entities - the core business objects.

mod category;
mod draft;
mod like;
mod observation;
mod profile;
mod stats;

pub use category::{BadgeTone, Category, UnknownCategory};
pub use draft::{
    ImageAttachment, ObservationDraft, ObservationEdit, ObservationPatch, is_image_media_type,
};
pub use like::{LikeChange, LikeState};
pub use observation::{Author, Observation};
pub use profile::{
    Achievement, AchievementKind, Profile, ProfileEdit, ProfilePatch, ProfileStats,
};
pub use stats::{CommunityStats, Contributor, top_contributors};
