//! Every user-facing message the engine can send, in one place.

use crate::domain::catalog::{Category, Product};

pub const ADDRESS_CONFIRMED: &str = "✅ *Endereço Registrado com Sucesso!*\nAssim que o pagamento for confirmado, seu pedido entrará em rota de entrega.";

pub const QUEUE_ACK: &str =
    "⏳ Você foi colocado na fila. Um de nossos atendentes entrará em contato em breve!";

pub const SOLD_OUT: &str = "❌ Que pena! Este item acabou de esgotar.";

pub const GENERATING_CHARGE: &str = "🔄 *Gerando Pix Copia e Cola...* Aguarde.";

pub const CHARGE_READY: &str = "✅ *PIX GERADO!* Use o código abaixo no seu banco:";

pub const ADDRESS_PROMPT: &str = "📍 Agora, digite seu ENDEREÇO COMPLETO: Rua, Número, Bairro, Ponto de Referência — envie tudo em uma só mensagem para agilizar seu atendimento. 🚚📦";

pub const PAYMENT_FAILED: &str =
    "❌ Erro ao gerar o pagamento. Tente novamente ou digite 0 para suporte.";

const DEFAULT_ICON: &str = "📦";

fn price_line(product: &Product) -> String {
    format!("*ID: {}* - {}\n💰 R$ {:.2}\n\n", product.id, product.name, product.price)
}

pub fn search_not_found(term: &str) -> String {
    format!("❌ Nenhum produto encontrado com o nome: *{term}*")
}

pub fn search_results(term: &str, products: &[Product]) -> String {
    let mut text = format!("🔍 *RESULTADOS PARA: {}*\n\n", term.to_uppercase());
    for product in products {
        text.push_str(&price_line(product));
    }
    text.push_str("Digite o *ID* para ver os detalhes e comprar.");
    text
}

pub fn main_menu(store_name: &str, categories: &[Category]) -> String {
    let mut menu = format!("*🛍️✨ CATÁLOGO {} ✨🛍️*\n\n", store_name.to_uppercase());
    menu.push_str("🔎 *Busca Rápida:* Digite 'buscar' + o produto\n_(Ex: buscar airpods)_\n\n");
    menu.push_str("🛒 *CATEGORIAS:*\n");
    for category in categories {
        let icon = category.icon.as_deref().unwrap_or(DEFAULT_ICON);
        menu.push_str(&format!("*{}* - {} {}\n", category.id, icon, category.name));
    }
    menu.push_str("\n*0* - 👤 Falar com Atendente\n\nDigite o número desejado:");
    menu
}

pub fn category_empty(category: &Category) -> String {
    format!("❌ A categoria *{}* está sem estoque no momento.", category.name)
}

pub fn category_listing(category: &Category, products: &[Product]) -> String {
    let mut text = format!("📁 *{}*\n\n", category.name.to_uppercase());
    for product in products {
        text.push_str(&price_line(product));
    }
    text.push_str("Digite o *ID* do produto para ver a foto e comprar:");
    text
}

pub fn product_caption(product: &Product) -> String {
    format!(
        "✨ *{}*\n\n💰 *Preço:* R$ {:.2}\n📦 *Estoque:* {} unidades\n\nDigite *PAGAR* para gerar o código Pix.",
        product.name, product.price, product.stock
    )
}
