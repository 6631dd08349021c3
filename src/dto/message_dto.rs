use serde::Deserialize;
use validator::Validate;

// Request del formulario público de contacto. El estado siempre se
// fuerza a pending en el servidor; el cliente no puede elegirlo.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitContactRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,

    // UUID del vehículo consultado, validado en el controller
    pub car_id: Option<String>,
}

// Query para listar mensajes del panel admin
#[derive(Debug, Default, Deserialize)]
pub struct MessageQueryParams {
    pub status: Option<String>,
}

// Request para cambiar el estado de un mensaje. Solo el estado: el
// resto de los campos del mensaje son inmutables desde el admin.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub status: String,
}
