// Registration rules for patients and professionals. Duplicate checks and
// account creation belong to the remote services and are not done here.

pub mod age;
pub mod cpf;
pub mod mask;
pub mod patient;
pub mod professional;
