use super::column::{Column, TableEntity, check_mark};
use crate::domain::entities::values::format_date_time;
use crate::domain::entities::{
    HelpRequest, MenuItem, MenuItemReview, Organization, RecommendationRequest,
};

impl TableEntity for HelpRequest {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "id", |r: &HelpRequest| r.id.to_string()),
            Column::new("Requester Email", "requesterEmail", |r: &HelpRequest| {
                r.requester_email.clone()
            }),
            Column::new("Team ID", "teamId", |r: &HelpRequest| r.team_id.clone()),
            Column::new(
                "Table or Breakout Room",
                "tableOrBreakoutRoom",
                |r: &HelpRequest| r.table_or_breakout_room.clone(),
            ),
            Column::new("Request Time", "requestTime", |r: &HelpRequest| {
                format_date_time(&r.request_time)
            }),
            Column::new("Explanation", "explanation", |r: &HelpRequest| {
                r.explanation.clone()
            }),
            Column::new("Solved", "solved", |r: &HelpRequest| check_mark(r.solved)),
        ]
    }
}

impl TableEntity for MenuItemReview {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "id", |r: &MenuItemReview| r.id.to_string()),
            Column::new("Item Id", "itemId", |r: &MenuItemReview| r.item_id.to_string()),
            Column::new("Reviewer Email", "reviewerEmail", |r: &MenuItemReview| {
                r.reviewer_email.clone()
            }),
            Column::new("Stars", "stars", |r: &MenuItemReview| r.stars.to_string()),
            Column::new("Date Reviewed", "dateReviewed", |r: &MenuItemReview| {
                format_date_time(&r.date_reviewed)
            }),
            Column::new("Comments", "comments", |r: &MenuItemReview| r.comments.clone()),
        ]
    }
}

impl TableEntity for RecommendationRequest {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "id", |r: &RecommendationRequest| r.id.to_string()),
            Column::new("Requester Email", "requesterEmail", |r: &RecommendationRequest| {
                r.requester_email.clone()
            }),
            Column::new("Professor Email", "professorEmail", |r: &RecommendationRequest| {
                r.professor_email.clone()
            }),
            Column::new("Explanation", "explanation", |r: &RecommendationRequest| {
                r.explanation.clone()
            }),
            Column::new("Finished", "done", |r: &RecommendationRequest| check_mark(r.done)),
            Column::new("Date Requested", "dateRequested", |r: &RecommendationRequest| {
                format_date_time(&r.date_requested)
            }),
            Column::new("Date Needed By", "dateNeeded", |r: &RecommendationRequest| {
                format_date_time(&r.date_needed)
            }),
        ]
    }
}

impl TableEntity for Organization {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("OrgCode", "orgCode", |r: &Organization| r.org_code.to_string()),
            Column::new("OrgTranslationShort", "orgTranslationShort", |r: &Organization| {
                r.org_translation_short.clone()
            }),
            Column::new("OrgTranslation", "orgTranslation", |r: &Organization| {
                r.org_translation.clone()
            }),
            Column::new("Inactive", "inactive", |r: &Organization| check_mark(r.inactive)),
        ]
    }
}

impl TableEntity for MenuItem {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "id", |r: &MenuItem| r.id.to_string()),
            Column::new("DiningCommonsCode", "diningCommonsCode", |r: &MenuItem| {
                r.dining_commons_code.clone()
            }),
            Column::new("Name", "name", |r: &MenuItem| r.name.clone()),
            Column::new("Station", "station", |r: &MenuItem| r.station.clone()),
        ]
    }
}
