//! End-to-end runs of the Orion shell on the headless backend

mod fixture;
mod run;
