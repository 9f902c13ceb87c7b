pub mod submit_registration;

pub use submit_registration::{
    RegistrationInput, RegistrationOutput, SubmitRegistrationUseCase,
};
