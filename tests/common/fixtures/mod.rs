use serde_json::{Value, json};

pub fn current_user(email: &str, roles: &[&str]) -> Value {
    let admin = roles.contains(&"ROLE_ADMIN");
    let roles: Vec<Value> = roles.iter().map(|r| json!({ "authority": r })).collect();
    json!({
        "loggedIn": true,
        "user": { "id": 1, "email": email, "admin": admin },
        "roles": roles
    })
}

pub fn one_help_request() -> Value {
    json!({
        "id": 1,
        "requesterEmail": "ttnguyen@ucsb.edu",
        "teamId": "F24-16",
        "tableOrBreakoutRoom": "Table_16",
        "requestTime": "2024-11-04T12:45:00",
        "explanation": "Needs_help_with_jpa03",
        "solved": false
    })
}

pub fn three_help_requests() -> Value {
    json!([
        {
            "id": 1,
            "requesterEmail": "ttnguyen@ucsb.edu",
            "teamId": "F24-16",
            "tableOrBreakoutRoom": "Table_16",
            "requestTime": "2024-11-04T12:45:00",
            "explanation": "Needs_help_with_jpa03",
            "solved": true
        },
        {
            "id": 2,
            "requesterEmail": "f24-01-user@ucsb.edu",
            "teamId": "F24-01",
            "tableOrBreakoutRoom": "Table_01",
            "requestTime": "2003-04-20T06:09:00",
            "explanation": "Needs_help_with_team01",
            "solved": false
        },
        {
            "id": 3,
            "requesterEmail": "f24-02-user@ucsb.edu",
            "teamId": "F24-02",
            "tableOrBreakoutRoom": "Table_02",
            "requestTime": "2000-11-15T00:00:00",
            "explanation": "Needs_help_with_jpa00",
            "solved": false
        }
    ])
}

pub fn three_menu_item_reviews() -> Value {
    json!([
        {
            "id": 1,
            "itemId": 10,
            "reviewerEmail": "rohanpreetam21@gmail.com",
            "stars": 5,
            "dateReviewed": "2022-01-02T12:00:00",
            "comments": "Very good"
        },
        {
            "id": 2,
            "itemId": 20,
            "reviewerEmail": "rohanpreetam@ucsb.com",
            "stars": 4,
            "dateReviewed": "2022-04-03T12:00:00",
            "comments": "Good"
        },
        {
            "id": 3,
            "itemId": 30,
            "reviewerEmail": "salshriaan@ucsb.com",
            "stars": 3,
            "dateReviewed": "2022-07-04T12:00:00",
            "comments": "Very average"
        }
    ])
}

pub fn three_recommendation_requests() -> Value {
    json!([
        {
            "id": 1,
            "requesterEmail": "jaydenjardine@cs.ucsb.edu",
            "professorEmail": "taylor.alison@recordlabel.com",
            "explanation": "Please feature on a track about college life.",
            "dateRequested": "2024-10-31T13:45:00",
            "dateNeeded": "2024-11-10T13:45:00",
            "done": false
        },
        {
            "id": 2,
            "requesterEmail": "jaydenjardine@cs.ucsb.edu",
            "professorEmail": "marshallm@shadyrecords.com",
            "explanation": "Spoken word project for a class on lyrical writing.",
            "dateRequested": "2024-10-31T14:53:00",
            "dateNeeded": "2024-11-08T14:53:00",
            "done": true
        },
        {
            "id": 3,
            "requesterEmail": "jaydenjardine@cs.ucsb.edu",
            "professorEmail": "rihanna.fenty@fentymusic.com",
            "explanation": "University event on Caribbean music in pop culture.",
            "dateRequested": "2024-10-31T15:30:00",
            "dateNeeded": "2024-11-15T15:30:00",
            "done": false
        }
    ])
}

pub fn zen_organization() -> Value {
    json!({
        "orgCode": "ZZZ",
        "orgTranslationShort": "ZEN",
        "orgTranslation": "ZENLESS ZONE",
        "inactive": true
    })
}

pub fn three_organizations() -> Value {
    json!([
        zen_organization(),
        {
            "orgCode": "SKY",
            "orgTranslationShort": "SKYDIVING CLUB",
            "orgTranslation": "SKYDIVING CLUB AT UCSB",
            "inactive": false
        },
        {
            "orgCode": "OSLI",
            "orgTranslationShort": "STUDENT LIFE",
            "orgTranslation": "OFFICE OF STUDENT LIFE",
            "inactive": false
        }
    ])
}

pub fn three_menu_items() -> Value {
    json!([
        { "id": 1, "diningCommonsCode": "ortega", "name": "Baked Pesto Pasta with Chicken", "station": "Entree Specials" },
        { "id": 2, "diningCommonsCode": "portola", "name": "Cream of Broccoli Soup (v)", "station": "Greens & Grains" },
        { "id": 3, "diningCommonsCode": "carrillo", "name": "Tofu Banh Mi Sandwich (v)", "station": "Entree Specials" }
    ])
}
