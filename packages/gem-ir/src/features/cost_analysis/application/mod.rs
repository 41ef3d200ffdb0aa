//! Flop Counting Application Layer (UseCase)
//!
//! External callers go through `FlopCountUseCase`; the analyzer and counter in
//! `infrastructure/` are implementation details.

mod cost_usecase;

pub use cost_usecase::{FlopCountUseCase, FlopCountUseCaseImpl};
