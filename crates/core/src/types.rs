/// Primary keys as issued by the campaign API.
pub type DbId = i64;
