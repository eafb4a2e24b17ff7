pub mod world_data;
