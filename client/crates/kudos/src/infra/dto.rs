//! Wire DTOs
//!
//! Serde shapes for the backend's JSON envelopes and the conversions into
//! domain entities. Guards everywhere: no field is assumed present, nested
//! collections default to empty, and timestamps that fail to parse
//! reconstruct as "now".

use chrono::{DateTime, Utc};
use kernel::page::PageMeta;
use serde::Deserialize;

use crate::domain::entity::analytics::{AnalyticsSummary, CategoryCount};
use crate::domain::entity::kudos::Kudos;
use crate::domain::entity::user::User;
use crate::domain::value_object::{Category, Recipient, Role, Team};

/// The backend's success envelope: `{ success, data, pagination? }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: T,
    #[serde(default)]
    pub pagination: Option<PageMetaDto>,
}

/// Pagination metadata as the backend sends it; every field optional
#[derive(Debug, Deserialize)]
pub struct PageMetaDto {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub total: Option<u64>,
    pub pages: Option<u32>,
}

/// Normalize backend pagination into a complete [`PageMeta`]
///
/// Missing metadata is synthesized from the requested page/limit and the
/// returned item count; a partially filled object has its gaps defaulted
/// the same way.
pub fn resolve_page_meta(
    meta: Option<PageMetaDto>,
    requested_page: u32,
    requested_limit: u32,
    item_count: usize,
) -> PageMeta {
    match meta {
        None => PageMeta::synthesized(requested_page, requested_limit, item_count as u64),
        Some(dto) => {
            let page = dto.page.unwrap_or(requested_page);
            let limit = dto.limit.unwrap_or(requested_limit);
            let total = dto.total.unwrap_or(item_count as u64);
            let pages = dto
                .pages
                .unwrap_or_else(|| PageMeta::synthesized(page, limit, total).pages);
            PageMeta {
                page,
                limit,
                total,
                pages,
            }
        }
    }
}

fn parse_timestamp(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

// ============================================================================
// Value shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RoleDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecipientDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl RoleDto {
    pub fn into_role(self) -> Role {
        Role {
            id: self.id,
            name: self.name,
        }
    }
}

impl TeamDto {
    pub fn into_team(self) -> Team {
        Team {
            id: self.id,
            name: self.name,
        }
    }
}

impl CategoryDto {
    pub fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

impl RecipientDto {
    pub fn into_recipient(self) -> Recipient {
        Recipient {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Option<Vec<RoleDto>>,
    #[serde(default)]
    pub approved: Option<bool>,
    #[serde(default)]
    pub team: Option<TeamDto>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl UserDto {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            roles: self
                .roles
                .unwrap_or_default()
                .into_iter()
                .map(RoleDto::into_role)
                .collect(),
            approved: self.approved.unwrap_or(false),
            team: self.team.map(TeamDto::into_team),
            created_at: parse_timestamp(self.created_at.as_deref()),
            updated_at: parse_timestamp(self.updated_at.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct KudosDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sender: Option<RecipientDto>,
    #[serde(default)]
    pub recipients: Option<Vec<RecipientDto>>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl KudosDto {
    pub fn into_kudos(self) -> Kudos {
        Kudos {
            id: self.id,
            message: self.message,
            sender: self.sender.map(RecipientDto::into_recipient),
            recipients: self
                .recipients
                .unwrap_or_default()
                .into_iter()
                .map(RecipientDto::into_recipient)
                .collect(),
            category: self.category.map(CategoryDto::into_category),
            created_at: parse_timestamp(self.created_at.as_deref()),
        }
    }
}

/// Login success payload: `data.token` + `data.user`
#[derive(Debug, Deserialize)]
pub struct LoginPayloadDto {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserDto>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryCountDto {
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsSummaryDto {
    #[serde(default)]
    pub total_kudos: Option<u64>,
    #[serde(default)]
    pub active_users: Option<u64>,
    #[serde(default)]
    pub top_categories: Option<Vec<CategoryCountDto>>,
}

impl AnalyticsSummaryDto {
    pub fn into_summary(self) -> AnalyticsSummary {
        AnalyticsSummary {
            total_kudos: self.total_kudos.unwrap_or(0),
            active_users: self.active_users.unwrap_or(0),
            top_categories: self
                .top_categories
                .unwrap_or_default()
                .into_iter()
                .filter_map(|entry| {
                    entry.category.map(|category| CategoryCount {
                        category: category.into_category(),
                        count: entry.count.unwrap_or(0),
                    })
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_page_meta_synthesizes_when_absent() {
        let meta = resolve_page_meta(None, 1, 10, 7);
        assert_eq!(
            meta,
            PageMeta {
                page: 1,
                limit: 10,
                total: 7,
                pages: 1
            }
        );
    }

    #[test]
    fn test_resolve_page_meta_empty_list_is_one_page() {
        let meta = resolve_page_meta(None, 1, 10, 0);
        assert_eq!(meta.total, 0);
        assert_eq!(meta.pages, 1);
    }

    #[test]
    fn test_resolve_page_meta_fills_gaps() {
        let dto = PageMetaDto {
            page: Some(2),
            limit: None,
            total: Some(45),
            pages: None,
        };
        let meta = resolve_page_meta(Some(dto), 2, 20, 20);
        assert_eq!(meta.page, 2);
        assert_eq!(meta.limit, 20);
        assert_eq!(meta.total, 45);
        assert_eq!(meta.pages, 3);
    }

    #[test]
    fn test_user_dto_defensive_defaults() {
        let dto: UserDto = serde_json::from_str(r#"{"id":"u1","email":"a@b.c"}"#).unwrap();
        let user = dto.into_user();
        assert_eq!(user.id, "u1");
        assert!(user.roles.is_empty());
        assert!(!user.approved);
        assert!(user.team.is_none());
    }

    #[test]
    fn test_user_dto_full_mapping() {
        let dto: UserDto = serde_json::from_str(
            r#"{
                "id": "u1",
                "email": "ada@example.com",
                "name": "Ada",
                "roles": [{"id": "r1", "name": "admin"}],
                "approved": true,
                "team": {"id": "t1", "name": "Platform"},
                "created_at": "2025-02-01T12:00:00Z",
                "updated_at": "2025-02-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        let user = dto.into_user();
        assert!(user.is_admin());
        assert!(user.is_approved());
        assert_eq!(user.team.as_ref().unwrap().name, "Platform");
        assert_eq!(user.created_at.to_rfc3339(), "2025-02-01T12:00:00+00:00");
    }

    #[test]
    fn test_kudos_dto_missing_recipients() {
        let dto: KudosDto =
            serde_json::from_str(r#"{"id":"k1","message":"Nice work"}"#).unwrap();
        let kudos = dto.into_kudos();
        assert!(kudos.recipients.is_empty());
        assert!(kudos.is_anonymous());
    }

    #[test]
    fn test_invalid_timestamp_defaults_to_now() {
        let before = Utc::now();
        let parsed = parse_timestamp(Some("yesterday-ish"));
        assert!(parsed >= before);
    }

    #[test]
    fn test_analytics_summary_drops_uncategorized_counts() {
        let dto: AnalyticsSummaryDto = serde_json::from_str(
            r#"{
                "total_kudos": 12,
                "top_categories": [
                    {"category": {"id": "c1", "name": "teamwork"}, "count": 7},
                    {"count": 5}
                ]
            }"#,
        )
        .unwrap();
        let summary = dto.into_summary();
        assert_eq!(summary.total_kudos, 12);
        assert_eq!(summary.active_users, 0);
        assert_eq!(summary.top_categories.len(), 1);
        assert_eq!(summary.top_categories[0].count, 7);
    }
}
