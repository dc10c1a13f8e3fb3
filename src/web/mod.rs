// Web tier: Askama page assembly for the dashboard

pub mod handlers;
