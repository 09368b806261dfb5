use crate::ghevent::Repository;

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub before: String,
    pub after: String,
    pub repository: Option<Repository>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_push() {
        let data = include_str!("../../test-srcs/events/push.json");

        let push: PushEvent = serde_json::from_str(data).expect("Should properly deserialize");
        assert_eq!(push.git_ref, "refs/heads/main");
        assert_eq!(
            push.repository.expect("repository present").full_name,
            "org/repo"
        );
    }
}
