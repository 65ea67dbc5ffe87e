// Task-Modul: Enthält alle Embassy Tasks
//
// Es gibt genau einen Arbeits-Task: die Belegungs-Schleife.
// main() schläft nach dem Spawnen.

pub mod occupancy;

// Re-export Tasks für einfachen Import
pub use occupancy::occupancy_task;
