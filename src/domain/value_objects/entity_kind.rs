use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// 管理対象のエンティティ種別。REST リソースとクライアント側ルートを一元管理する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    HelpRequest,
    MenuItemReview,
    RecommendationRequest,
    Organization,
    MenuItem,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::HelpRequest,
        EntityKind::MenuItemReview,
        EntityKind::RecommendationRequest,
        EntityKind::Organization,
        EntityKind::MenuItem,
    ];

    /// REST リソースのベースパス
    pub fn api_base(&self) -> &'static str {
        match self {
            EntityKind::HelpRequest => "/api/helprequest",
            EntityKind::MenuItemReview => "/api/menuitemreview",
            EntityKind::RecommendationRequest => "/api/recommendationRequest",
            EntityKind::Organization => "/api/organizations",
            EntityKind::MenuItem => "/api/ucsbdiningcommonsmenuitem",
        }
    }

    pub fn list_path(&self) -> String {
        format!("{}/all", self.api_base())
    }

    pub fn create_path(&self) -> String {
        format!("{}/post", self.api_base())
    }

    /// 単一レコードを指定するクエリパラメータ名
    pub fn key_param(&self) -> &'static str {
        match self {
            EntityKind::Organization => "orgCode",
            _ => "id",
        }
    }

    /// 一覧ページのクライアント側ルート
    pub fn route_base(&self) -> &'static str {
        match self {
            EntityKind::HelpRequest => "/helprequest",
            EntityKind::MenuItemReview => "/menuitemreview",
            EntityKind::RecommendationRequest => "/recommendationRequest",
            EntityKind::Organization => "/organizations",
            EntityKind::MenuItem => "/diningcommonsmenuitem",
        }
    }

    pub fn create_route(&self) -> String {
        format!("{}/create", self.route_base())
    }

    pub fn edit_route(&self, key: &str) -> String {
        format!("{}/edit/{}", self.route_base(), key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::HelpRequest => "HelpRequest",
            EntityKind::MenuItemReview => "MenuItemReview",
            EntityKind::RecommendationRequest => "RecommendationRequest",
            EntityKind::Organization => "Organization",
            EntityKind::MenuItem => "MenuItem",
        }
    }

    pub fn plural_title(&self) -> &'static str {
        match self {
            EntityKind::HelpRequest => "Help Requests",
            EntityKind::MenuItemReview => "Menu Item Reviews",
            EntityKind::RecommendationRequest => "Recommendation Requests",
            EntityKind::Organization => "Organizations",
            EntityKind::MenuItem => "Dining Commons Menu Items",
        }
    }

    pub fn table_test_id(&self) -> String {
        format!("{}Table", self.display_name())
    }

    pub fn form_test_id(&self) -> String {
        format!("{}Form", self.display_name())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "helprequest" | "helprequests" => Ok(EntityKind::HelpRequest),
            "menuitemreview" | "menuitemreviews" => Ok(EntityKind::MenuItemReview),
            "recommendationrequest" | "recommendationrequests" => {
                Ok(EntityKind::RecommendationRequest)
            }
            "organization" | "organizations" => Ok(EntityKind::Organization),
            "menuitem" | "menuitems" | "diningcommonsmenuitem" => Ok(EntityKind::MenuItem),
            _ => Err(format!("Unknown entity kind: {s}")),
        }
    }
}
