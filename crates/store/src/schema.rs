//! Worksheet names and headers.
//!
//! These match the live spreadsheet; header text is the deployment's
//! language and must not be translated.

/// Primary worksheet holding one row per order.
pub const ORDERS_SHEET: &str = "Pedidos";

/// Column order of the primary worksheet.
pub const ORDERS_HEADER: [&str; 8] = [
    "id",
    "cliente",
    "produto",
    "quantidade",
    "valor",
    "data_pedido",
    "entregue",
    "pago",
];

/// Revenue ledger, created lazily on first payment.
pub const REVENUE_SHEET: &str = "Receitas";

pub const REVENUE_HEADER: [&str; 4] = ["ID Pedido", "Cliente", "Valor", "Data Pagamento"];

/// Cost ledger, created lazily on first cost entry.
pub const COSTS_SHEET: &str = "Custos";

pub const COSTS_HEADER: [&str; 4] = ["Descrição", "Valor", "Categoria", "Data Registro"];

/// Column holding the delivery marker.
pub const COL_DELIVERED: &str = "entregue";

/// Column holding the payment marker.
pub const COL_PAID: &str = "pago";
