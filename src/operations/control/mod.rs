mod cars;
mod place_train;
mod set_speed;

pub use cars::{AddCar, RemoveCar};
pub use place_train::PlaceTrain;
pub use set_speed::SetSpeed;
