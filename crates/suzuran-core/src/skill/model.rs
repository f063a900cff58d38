use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::request::{CreateSkillRequest, UpdateSkillRequest};
use crate::patch::replace;
use crate::record::{EntityKind, Record};

/// Who or what a skill can target.
///
/// Two labelling schemes coexist in stored data: the earlier
/// single/all/self set and the later vs-unit/vs-ground/melee/area set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum SkillTarget {
    #[serde(rename = "単体")]
    Single,
    #[serde(rename = "全体")]
    All,
    #[serde(rename = "自身")]
    Myself,
    #[serde(rename = "対ユニット")]
    VsUnit,
    #[serde(rename = "対地")]
    VsGround,
    #[serde(rename = "近接")]
    Melee,
    #[serde(rename = "範囲")]
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum SkillType {
    #[serde(rename = "パッシブ")]
    Passive,
    #[serde(rename = "アクティブ")]
    Active,
    #[serde(rename = "即時")]
    Instant,
    #[serde(rename = "オーラ")]
    Aura,
    #[serde(rename = "通常攻撃")]
    NormalAttack,
    #[serde(rename = "リアクション")]
    Reaction,
}

/// Reach of a skill: distance band, height-difference band and the height
/// band of its area of effect. Every bound is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_diff_from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_diff_to: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_height_diff_from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_height_diff_to: Option<i64>,
    /// Range diagram image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SkillRange {
    pub fn is_empty(&self) -> bool {
        *self == SkillRange::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    /// Cast time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ct: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub targets: Vec<SkillTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<SkillType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SkillRange>,
    #[serde(default)]
    pub effect_ids: Vec<String>,
}

impl Record for Skill {
    type Create = CreateSkillRequest;
    type Update = UpdateSkillRequest;

    const KIND: EntityKind = EntityKind::Skill;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateSkillRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            icon: input.icon,
            cost: input.cost,
            ct: input.ct,
            description: input.description,
            targets: input.targets,
            skill_type: input.skill_type,
            range: input.range,
            effect_ids: input.effect_ids,
        }
    }

    fn apply_update(&mut self, patch: &UpdateSkillRequest) {
        replace(&mut self.name, &patch.name);
        patch.icon.apply_to(&mut self.icon);
        patch.cost.apply_to(&mut self.cost);
        patch.ct.apply_to(&mut self.ct);
        patch.description.apply_to(&mut self.description);
        replace(&mut self.targets, &patch.targets);
        patch.skill_type.apply_to(&mut self.skill_type);
        patch.range.apply_to(&mut self.range);
        replace(&mut self.effect_ids, &patch.effect_ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;

    #[test]
    fn test_reads_stored_skill() {
        let json = r#"{
            "id": "s1",
            "name": "ファイア",
            "cost": 3,
            "ct": 0,
            "description": "",
            "targets": ["単体", "範囲"],
            "skillType": "アクティブ",
            "effectIds": ["e1"],
            "range": {"distanceFrom": 1, "distanceTo": 3, "heightDiffFrom": null}
        }"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.targets, vec![SkillTarget::Single, SkillTarget::Area]);
        assert_eq!(skill.skill_type, Some(SkillType::Active));
        let range = skill.range.unwrap();
        assert_eq!(range.distance_to, Some(3));
        assert_eq!(range.height_diff_from, None);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let skill: Skill = serde_json::from_str(r#"{"id":"s2","name":"構え"}"#).unwrap();
        assert!(skill.targets.is_empty());
        assert!(skill.effect_ids.is_empty());
    }

    #[test]
    fn test_update_replaces_range_block() {
        let mut skill: Skill = serde_json::from_str(
            r#"{"id":"s3","name":"n","range":{"distanceFrom":1,"image":"/uploads/r.png"}}"#,
        )
        .unwrap();
        skill.apply_update(&UpdateSkillRequest {
            range: Patch::Set(SkillRange {
                distance_to: Some(4),
                ..Default::default()
            }),
            ..Default::default()
        });
        let range = skill.range.clone().unwrap();
        assert_eq!(range.distance_from, None);
        assert_eq!(range.image, None);
        assert_eq!(range.distance_to, Some(4));

        skill.apply_update(&UpdateSkillRequest {
            range: Patch::Clear,
            ..Default::default()
        });
        assert_eq!(skill.range, None);
    }

    #[test]
    fn test_empty_range() {
        assert!(SkillRange::default().is_empty());
    }
}
