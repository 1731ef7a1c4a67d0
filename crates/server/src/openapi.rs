use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EnderecoDoc {
    pub rua: String,
    pub numero: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

#[derive(ToSchema)]
pub struct ClienteCreateDoc {
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub endereco: EnderecoDoc,
}

#[derive(ToSchema)]
pub struct ClienteDoc {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub endereco: EnderecoDoc,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub mensagem: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Cliente API", version = "1.0"),
    paths(
        crate::routes::health,
        crate::routes::clientes::list,
        crate::routes::clientes::get,
        crate::routes::clientes::create,
        crate::routes::clientes::update,
        crate::routes::clientes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EnderecoDoc,
            ClienteCreateDoc,
            ClienteDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clientes")
    )
)]
pub struct ApiDoc;
