// Domain-layer modules and shared errors/models
pub mod assessment {
    pub use crate::assessment::*;
}

pub mod certificate {
    pub use crate::certificate::*;
}

pub mod step_controller {
    pub use crate::step_controller::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
