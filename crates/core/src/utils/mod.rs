pub mod input_coercion;

pub use input_coercion::{
    flag_or, non_negative_number_or, number_or, required_name, FlagInput, NumberInput,
};
