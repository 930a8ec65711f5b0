mod helpers;
mod menu;
mod order;
