use clap::{Args, Parser, Subcommand, ValueEnum};
use garbapp::attributes::AttributeKind;
use garbapp::commands::{SearchForm, SortKey};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "garb",
    bin_name = "garb",
    version,
    disable_help_subcommand = true,
    after_help = "Examples:\n  garb search --category t-shirt --size M --max-price 30\n  garb values neckline"
)]
#[command(about = "Find the garment you have in mind in a plain text inventory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Inventory file to load (overrides configuration)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Configuration file to read before the usual locations
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search garments by attributes and price
    #[command(alias = "s")]
    Search(SearchArgs),

    /// List the brands in the catalog
    Brands,

    /// List the legal values of an attribute (e.g. size, neckline, brand)
    Values {
        /// Attribute name
        kind: String,
    },

    /// Load the catalog and summarize it
    Check,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Garment category (T-Shirt or Hoodie)
    #[arg(short, long)]
    pub category: String,

    /// Acceptable size; repeat or separate with commas
    #[arg(short, long = "size", value_name = "SIZE", value_delimiter = ',')]
    pub sizes: Vec<String>,

    /// Acceptable brand; repeat for several
    #[arg(short, long = "brand", value_name = "BRAND")]
    pub brands: Vec<String>,

    #[arg(short, long)]
    pub material: Option<String>,

    /// T-shirts only
    #[arg(long)]
    pub neckline: Option<String>,

    /// T-shirts only
    #[arg(long)]
    pub sleeve: Option<String>,

    /// Hoodies only
    #[arg(long)]
    pub hoodie_style: Option<String>,

    /// Hoodies only
    #[arg(long)]
    pub pocket: Option<String>,

    /// Lowest acceptable price [default: 0.00]
    #[arg(long, value_name = "PRICE")]
    pub min_price: Option<String>,

    /// Highest acceptable price [default: from configuration, 100.00]
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<String>,

    /// Order of the results
    #[arg(long, value_enum, default_value_t = SortArg::Catalog)]
    pub sort: SortArg,
}

impl SearchArgs {
    pub fn to_form(&self) -> SearchForm {
        let fields = [
            (AttributeKind::Material, &self.material),
            (AttributeKind::Neckline, &self.neckline),
            (AttributeKind::SleeveType, &self.sleeve),
            (AttributeKind::HoodieStyle, &self.hoodie_style),
            (AttributeKind::PocketType, &self.pocket),
        ];
        let form = fields
            .into_iter()
            .filter_map(|(kind, text)| text.as_ref().map(|text| (kind, text)))
            .fold(SearchForm::new(&self.category), |form, (kind, text)| {
                form.with_field(kind, text.as_str())
            });

        form.with_sizes(self.sizes.iter().map(String::as_str))
            .with_brands(self.brands.iter().map(String::as_str))
            .with_price_range(
                self.min_price.clone().unwrap_or_default(),
                self.max_price.clone().unwrap_or_default(),
            )
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Catalog,
    Name,
    Price,
    Code,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Catalog => SortKey::Catalog,
            SortArg::Name => SortKey::Name,
            SortArg::Price => SortKey::Price,
            SortArg::Code => SortKey::Code,
        }
    }
}
