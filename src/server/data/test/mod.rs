mod page;
mod role;
mod user;
