mod bomb;
mod game;
mod inventory;
mod team;
mod user;
