//! Preference aggregate models and DTOs.
//!
//! A preference row references one shoe type, one injury profile and at most
//! one supplement. Those dependent rows belong to exactly one preference and
//! are written only through the aggregate (see `PreferenceRepo`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stride_core::types::{DbId, Timestamp};
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `supplements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Supplement {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `shoe_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShoeType {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `injury_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InjuryProfile {
    pub id: DbId,
    pub tennis_elbow: bool,
    pub muscle_strain: bool,
    pub bicep_tendonitis: bool,
    pub fracture: bool,
    pub forearm_strain: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `user_preferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Preference {
    pub id: DbId,
    pub user_id: String,
    pub supplement_id: Option<DbId>,
    pub shoe_type_id: DbId,
    pub injury_profile_id: DbId,
    pub running_surface: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Read projection
// ---------------------------------------------------------------------------

/// Name/model/description triple shared by supplements and shoe types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductDetail {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    pub description: String,
}

/// The five injury flags, used both as input and in the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRow, Serialize, Deserialize)]
pub struct InjuryFlags {
    pub tennis_elbow: bool,
    pub muscle_strain: bool,
    pub bicep_tendonitis: bool,
    pub fracture: bool,
    pub forearm_strain: bool,
}

/// A preference with its referenced rows folded in, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceDetail {
    pub user_id: String,
    pub running_surface: String,
    pub supplements: Option<ProductDetail>,
    pub shoe_type: ProductDetail,
    pub injuries: InjuryFlags,
}

/// Flat row produced by the preference JOIN query.
#[derive(Debug, Clone, FromRow)]
pub struct PreferenceDetailRow {
    pub user_id: String,
    pub running_surface: String,
    pub supplement_name: Option<String>,
    pub supplement_model: Option<String>,
    pub supplement_description: Option<String>,
    pub shoe_name: String,
    pub shoe_model: String,
    pub shoe_description: String,
    pub tennis_elbow: bool,
    pub muscle_strain: bool,
    pub bicep_tendonitis: bool,
    pub fracture: bool,
    pub forearm_strain: bool,
}

impl From<PreferenceDetailRow> for PreferenceDetail {
    fn from(row: PreferenceDetailRow) -> Self {
        // The supplement columns come from a LEFT JOIN; all three are NOT NULL
        // in the table, so a null name means no supplement is referenced.
        let supplements = match (
            row.supplement_name,
            row.supplement_model,
            row.supplement_description,
        ) {
            (Some(name), Some(model), Some(description)) => Some(ProductDetail {
                name,
                model,
                description,
            }),
            _ => None,
        };

        PreferenceDetail {
            user_id: row.user_id,
            running_surface: row.running_surface,
            supplements,
            shoe_type: ProductDetail {
                name: row.shoe_name,
                model: row.shoe_model,
                description: row.shoe_description,
            },
            injuries: InjuryFlags {
                tennis_elbow: row.tennis_elbow,
                muscle_strain: row.muscle_strain,
                bicep_tendonitis: row.bicep_tendonitis,
                fracture: row.fracture,
                forearm_strain: row.forearm_strain,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a preference aggregate.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePreference {
    #[serde(default)]
    #[validate(nested)]
    pub supplements: Option<ProductDetail>,
    #[validate(nested)]
    pub shoe_type: ProductDetail,
    pub injuries: InjuryFlags,
    #[validate(length(min = 1, max = 100))]
    pub running_surface: String,
}

/// Partial update of a supplement or shoe-type row.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductPatch {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// Turn the patch into a full product, or name the first absent field.
    pub fn complete(&self) -> Result<ProductDetail, &'static str> {
        let name = self.name.clone().ok_or("name")?;
        let model = self.model.clone().ok_or("model")?;
        let description = self.description.clone().ok_or("description")?;
        Ok(ProductDetail {
            name,
            model,
            description,
        })
    }
}

/// Partial update of an injury profile.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InjuryPatch {
    pub tennis_elbow: Option<bool>,
    pub muscle_strain: Option<bool>,
    pub bicep_tendonitis: Option<bool>,
    pub fracture: Option<bool>,
    pub forearm_strain: Option<bool>,
}

/// DTO for partially updating a preference aggregate.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePreference {
    #[validate(nested)]
    pub supplements: Option<ProductPatch>,
    #[validate(nested)]
    pub shoe_type: Option<ProductPatch>,
    pub injuries: Option<InjuryPatch>,
    #[validate(length(min = 1, max = 100))]
    pub running_surface: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_patch_completes_only_with_all_fields() {
        let partial = ProductPatch {
            name: Some("Whey".into()),
            model: None,
            description: Some("protein".into()),
        };
        assert_eq!(partial.complete().unwrap_err(), "model");

        let full = ProductPatch {
            model: Some("Gold".into()),
            ..partial
        };
        assert_eq!(full.complete().unwrap().model, "Gold");
    }

    #[test]
    fn detail_row_without_supplement_projects_null() {
        let row = PreferenceDetailRow {
            user_id: "u1".into(),
            running_surface: "gravel".into(),
            supplement_name: None,
            supplement_model: None,
            supplement_description: None,
            shoe_name: "Trail".into(),
            shoe_model: "X1".into(),
            shoe_description: "trail shoe".into(),
            tennis_elbow: false,
            muscle_strain: true,
            bicep_tendonitis: false,
            fracture: false,
            forearm_strain: false,
        };
        let detail = PreferenceDetail::from(row);
        assert!(detail.supplements.is_none());
        assert_eq!(detail.shoe_type.name, "Trail");
        assert!(detail.injuries.muscle_strain);
    }

    #[test]
    fn create_dto_rejects_overlong_running_surface() {
        let dto = CreatePreference {
            supplements: None,
            shoe_type: ProductDetail {
                name: "Trail".into(),
                model: "X1".into(),
                description: String::new(),
            },
            injuries: InjuryFlags::default(),
            running_surface: "g".repeat(101),
        };
        assert!(dto.validate().is_err());
    }
}
