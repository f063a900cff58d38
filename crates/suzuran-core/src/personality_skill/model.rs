use serde::{Deserialize, Serialize};

use crate::patch::{Patch, replace};
use crate::record::{EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalitySkill {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub effect_ids: Vec<String>,
    pub star1_description: String,
    pub star2_description: String,
    pub star3_description: String,
    pub star4_description: String,
    pub star5_description: String,
}

impl PersonalitySkill {
    /// Description for star rank `star` (1..=5).
    pub fn description_for_star(&self, star: u8) -> Option<&str> {
        match star {
            1 => Some(&self.star1_description),
            2 => Some(&self.star2_description),
            3 => Some(&self.star3_description),
            4 => Some(&self.star4_description),
            5 => Some(&self.star5_description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonalitySkillRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub effect_ids: Vec<String>,
    #[serde(default)]
    pub star1_description: String,
    #[serde(default)]
    pub star2_description: String,
    #[serde(default)]
    pub star3_description: String,
    #[serde(default)]
    pub star4_description: String,
    #[serde(default)]
    pub star5_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonalitySkillRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub icon: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star1_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star2_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star3_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star4_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star5_description: Option<String>,
}

impl Record for PersonalitySkill {
    type Create = CreatePersonalitySkillRequest;
    type Update = UpdatePersonalitySkillRequest;

    const KIND: EntityKind = EntityKind::PersonalitySkill;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreatePersonalitySkillRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            icon: input.icon,
            effect_ids: input.effect_ids,
            star1_description: input.star1_description,
            star2_description: input.star2_description,
            star3_description: input.star3_description,
            star4_description: input.star4_description,
            star5_description: input.star5_description,
        }
    }

    fn apply_update(&mut self, patch: &UpdatePersonalitySkillRequest) {
        replace(&mut self.name, &patch.name);
        patch.icon.apply_to(&mut self.icon);
        replace(&mut self.effect_ids, &patch.effect_ids);
        replace(&mut self.star1_description, &patch.star1_description);
        replace(&mut self.star2_description, &patch.star2_description);
        replace(&mut self.star3_description, &patch.star3_description);
        replace(&mut self.star4_description, &patch.star4_description);
        replace(&mut self.star5_description, &patch.star5_description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_field_names_on_disk() {
        let skill = PersonalitySkill::from_create(
            "p1".to_string(),
            CreatePersonalitySkillRequest {
                name: "勇猛".to_string(),
                star1_description: "1".to_string(),
                star5_description: "5".to_string(),
                ..Default::default()
            },
            "",
        );
        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["star1Description"], "1");
        assert_eq!(json["star5Description"], "5");
        assert_eq!(json["effectIds"], serde_json::json!([]));
        assert_eq!(skill.description_for_star(5), Some("5"));
        assert_eq!(skill.description_for_star(6), None);
    }
}
