use common::misc::Role;

pub struct UserCreateRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: Role,
}
