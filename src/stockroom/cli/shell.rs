//! # Interactive Shell
//!
//! The numbered-menu loop. Each menu entry maps to one handler, which prompts
//! for its fields, makes a single API call and renders the outcome.
//!
//! Bad input never ends the session: parse errors are printed and the same
//! field is asked again. The loop ends on "Exit" or when input runs out;
//! only terminal I/O failures come back as `Err`.

use super::prompt::Prompter;
use super::render::Renderer;
use std::io::{BufRead, Write};
use stockroom::api::{CategoryListing, CmdMessage, InventoryApi, Lookup, NewProduct};
use stockroom::error::{Result, StockError};
use stockroom::input;
use stockroom::model::ProductId;
use stockroom::store::memory::InMemoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddProduct,
    ViewAll,
    Search,
    UpdateStock,
    LowStock,
    ByCategory,
    Valuation,
    Delete,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddProduct,
        MenuChoice::ViewAll,
        MenuChoice::Search,
        MenuChoice::UpdateStock,
        MenuChoice::LowStock,
        MenuChoice::ByCategory,
        MenuChoice::Valuation,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn parse(number: i64) -> Option<MenuChoice> {
        MenuChoice::ALL.into_iter().find(|c| i64::from(c.number()) == number)
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::AddProduct => 1,
            MenuChoice::ViewAll => 2,
            MenuChoice::Search => 3,
            MenuChoice::UpdateStock => 4,
            MenuChoice::LowStock => 5,
            MenuChoice::ByCategory => 6,
            MenuChoice::Valuation => 7,
            MenuChoice::Delete => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::AddProduct => "Add New Product",
            MenuChoice::ViewAll => "View All Products",
            MenuChoice::Search => "Search Product",
            MenuChoice::UpdateStock => "Update Stock",
            MenuChoice::LowStock => "View Low Stock Alerts",
            MenuChoice::ByCategory => "View Products by Category",
            MenuChoice::Valuation => "Calculate Inventory Value",
            MenuChoice::Delete => "Delete Product",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Unwraps an answered prompt, or leaves the handler with `Flow::Exit` when
/// input ran out.
macro_rules! answer {
    ($e:expr) => {
        match $e? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Shell<R, W> {
    api: InventoryApi<InMemoryStore>,
    prompter: Prompter<R, W>,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        api: InventoryApi<InMemoryStore>,
        input: R,
        output: W,
        renderer: Renderer,
    ) -> Self {
        Self {
            api,
            prompter: Prompter::new(input, output),
            renderer,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let banner = format!(
            "=== Smart Inventory Manager ({} Version) ===\n",
            self.renderer.currency_symbol()
        );
        self.prompter.write(&banner)?;

        let entries: Vec<(u8, &str)> = MenuChoice::ALL
            .iter()
            .map(|c| (c.number(), c.label()))
            .collect();
        let menu = self.renderer.menu(&entries);

        loop {
            self.prompter.write(&format!("\n{}", menu))?;
            let Some(raw) = self.prompter.read_line("Enter your choice: ")? else {
                break;
            };

            let number = match input::parse_int(&raw, "menu choice") {
                Ok(number) => number,
                Err(e) => {
                    self.show_error(&e)?;
                    continue;
                }
            };

            let Some(choice) = MenuChoice::parse(number) else {
                tracing::debug!(number, "invalid menu choice");
                self.show(&[CmdMessage::error("Invalid choice! Please try again.")])?;
                continue;
            };

            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }

        self.prompter
            .write("\nThank you for using Smart Inventory Manager!\n")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => Ok(Flow::Exit),
            MenuChoice::AddProduct => self.handle_add(),
            MenuChoice::ViewAll => self.handle_view_all(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::UpdateStock => self.handle_update_stock(),
            MenuChoice::LowStock => self.handle_low_stock(),
            MenuChoice::ByCategory => self.handle_by_category(),
            MenuChoice::Valuation => self.handle_valuation(),
            MenuChoice::Delete => self.handle_delete(),
        }
    }

    fn handle_add(&mut self) -> Result<Flow> {
        let name = answer!(self.ask("Enter product name: ", |raw| {
            let name = raw.trim();
            if name.is_empty() {
                return Err(StockError::InvalidArgument(
                    "product name cannot be empty".to_string(),
                ));
            }
            Ok(name.to_string())
        }));
        let quantity = answer!(self.ask("Enter quantity: ", |raw| {
            input::parse_count(raw, "quantity")
        }));
        let symbol = self.renderer.currency_symbol().to_string();
        let price = answer!(self.ask("Enter price: ", |raw| input::parse_price(raw, &symbol)));
        let reorder_level = answer!(self.ask("Enter reorder level: ", |raw| {
            input::parse_count(raw, "reorder level")
        }));
        let lead_time_days = answer!(self.ask("Enter lead time (days): ", |raw| {
            input::parse_count(raw, "lead time")
        }));

        let categories = self.renderer.categories(self.api.categories());
        self.prompter.write(&categories)?;
        let category_choice = answer!(self.ask("Enter category number: ", |raw| {
            input::parse_int(raw, "category number")
        }));

        let new = NewProduct {
            name,
            quantity,
            price,
            reorder_level,
            lead_time_days,
            category_choice,
        };
        match self.api.create_product(new) {
            Ok(created) => self.show(&created.messages())?,
            Err(e) if e.is_input_error() => self.show_error(&e)?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn handle_view_all(&mut self) -> Result<Flow> {
        let products = self.api.list_all();
        let output = self.renderer.products(
            "=== Inventory List ===",
            &products,
            "No products in inventory!",
        );
        self.section(&output)?;
        Ok(Flow::Continue)
    }

    fn handle_search(&mut self) -> Result<Flow> {
        let id = answer!(self.ask_id());
        match self.api.find_by_id(id) {
            Lookup::Found(product) => {
                let output = self.renderer.product_found(&product);
                self.section(&output)?;
            }
            Lookup::NotFound(_) => self.show(&[CmdMessage::error("Product not found!")])?,
        }
        Ok(Flow::Continue)
    }

    fn handle_update_stock(&mut self) -> Result<Flow> {
        let id = answer!(self.ask_id());
        let current = match self.api.find_by_id(id) {
            Lookup::Found(product) => product.quantity(),
            Lookup::NotFound(_) => {
                self.show(&[CmdMessage::error("Product not found!")])?;
                return Ok(Flow::Continue);
            }
        };
        self.prompter
            .write(&format!("Current quantity: {}\n", current))?;

        let selector = answer!(self.ask("Add or Remove stock? (A/R): ", |raw| {
            Ok(raw.trim().to_string())
        }));
        let amount = answer!(self.ask("Enter quantity: ", |raw| {
            input::parse_count(raw, "quantity")
        }));

        let outcome = match self.api.adjust_stock(id, &selector, amount) {
            Ok(outcome) => outcome,
            Err(e) if e.is_input_error() => {
                self.show_error(&e)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };
        self.show(&[outcome.message()])?;
        if let Some(product) = outcome.product() {
            self.prompter
                .write(&format!("New quantity: {}\n", product.quantity()))?;
        }
        Ok(Flow::Continue)
    }

    fn handle_low_stock(&mut self) -> Result<Flow> {
        let products = self.api.low_stock_report();
        let output = self.renderer.low_stock(&products);
        self.section(&output)?;
        Ok(Flow::Continue)
    }

    fn handle_by_category(&mut self) -> Result<Flow> {
        let categories = self.renderer.categories(self.api.categories());
        self.prompter.write(&categories)?;
        let choice = answer!(self.ask("Enter category number: ", |raw| {
            input::parse_int(raw, "category number")
        }));

        match self.api.by_category(choice) {
            CategoryListing::Listed { category, products } => {
                let output = self.renderer.category_listing(category, &products);
                self.section(&output)?;
            }
            CategoryListing::InvalidCategory(_) => {
                self.show(&[CmdMessage::error("Invalid category!")])?
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_valuation(&mut self) -> Result<Flow> {
        let summary = self.api.valuation_summary();
        let output = self.renderer.summary(&summary);
        self.section(&output)?;
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self) -> Result<Flow> {
        let id = answer!(self.ask_id());
        let name = match self.api.find_by_id(id) {
            Lookup::Found(product) => product.name().to_string(),
            Lookup::NotFound(_) => {
                self.show(&[CmdMessage::error("Product not found!")])?;
                return Ok(Flow::Continue);
            }
        };

        let prompt = format!("Delete product: {}? (Y/N): ", name);
        let confirmed = answer!(self.ask(&prompt, |raw| Ok(input::parse_confirmation(raw))));
        if confirmed {
            let deletion = self.api.delete_product(id);
            self.show(&[deletion.message()])?;
        } else {
            self.show(&[CmdMessage::info("Deletion cancelled.")])?;
        }
        Ok(Flow::Continue)
    }

    fn ask_id(&mut self) -> Result<Option<ProductId>> {
        self.ask("Enter product ID: ", input::parse_id)
    }

    /// Prompts until `parse` accepts the answer. Input errors are shown and
    /// the question repeats; `None` means input ran out.
    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let Some(raw) = self.prompter.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_input_error() => self.show_error(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn section(&mut self, output: &str) -> Result<()> {
        self.prompter.write(&format!("\n{}", output))
    }

    fn show(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let output = self.renderer.messages(messages);
        self.prompter.write(&output)
    }

    fn show_error(&mut self, error: &StockError) -> Result<()> {
        self.show(&[CmdMessage::error(error.to_string())])
    }
}
