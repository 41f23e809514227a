#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub passport_number: String,
}
