use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Embedded address. Valid only when all five fields are non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endereco {
    pub rua: String,
    pub numero: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

impl Endereco {
    pub fn is_valid(&self) -> bool {
        [&self.rua, &self.numero, &self.cidade, &self.estado, &self.cep]
            .iter()
            .all(|f| !is_blank(f))
    }
}

/// Domain cliente (business view). `id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliente {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub endereco: Endereco,
}

impl Cliente {
    /// Build a new cliente with a freshly generated id.
    pub fn new(input: ClienteCreateDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            nome: input.nome,
            email: input.email,
            telefone: input.telefone,
            endereco: input.endereco.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !is_blank(&self.nome) && !is_blank(&self.email) && self.endereco.is_valid()
    }

    /// Replace every mutable field with the input's; the input's `id` is ignored.
    pub fn apply(&mut self, input: ClienteDto) {
        self.nome = input.nome;
        self.email = input.email;
        self.telefone = input.telefone;
        self.endereco = input.endereco.into();
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Address as sent and returned over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EnderecoDto {
    #[validate(length(min = 1, message = "rua é obrigatória"))]
    pub rua: String,
    #[validate(length(min = 1, message = "numero é obrigatório"))]
    pub numero: String,
    #[validate(length(min = 1, message = "cidade é obrigatória"))]
    pub cidade: String,
    #[validate(length(min = 1, message = "estado é obrigatório"))]
    pub estado: String,
    #[validate(length(min = 1, message = "cep é obrigatório"))]
    pub cep: String,
}

/// Creation input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClienteCreateDto {
    #[validate(length(min = 1, message = "nome é obrigatório"))]
    pub nome: String,
    #[validate(email(message = "email inválido"))]
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[validate(nested)]
    pub endereco: EnderecoDto,
}

/// Read representation; also the full-replacement input of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClienteDto {
    #[serde(default)]
    pub id: Uuid,
    #[validate(length(min = 1, message = "nome é obrigatório"))]
    pub nome: String,
    #[validate(email(message = "email inválido"))]
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[validate(nested)]
    pub endereco: EnderecoDto,
}

impl From<EnderecoDto> for Endereco {
    fn from(d: EnderecoDto) -> Self {
        Self { rua: d.rua, numero: d.numero, cidade: d.cidade, estado: d.estado, cep: d.cep }
    }
}

impl From<Endereco> for EnderecoDto {
    fn from(e: Endereco) -> Self {
        Self { rua: e.rua, numero: e.numero, cidade: e.cidade, estado: e.estado, cep: e.cep }
    }
}

impl From<Cliente> for ClienteDto {
    fn from(c: Cliente) -> Self {
        Self {
            id: c.id,
            nome: c.nome,
            email: c.email,
            telefone: c.telefone,
            endereco: c.endereco.into(),
        }
    }
}
