#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct User {
    pub login: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
}
