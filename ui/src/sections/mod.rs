// One module per page section, in scroll order.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;
