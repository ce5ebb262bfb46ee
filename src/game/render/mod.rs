pub mod trail_texture;
