pub mod sample_recipes_seed;
