pub mod input_spec;
pub mod input_spec_flux_schnell;
