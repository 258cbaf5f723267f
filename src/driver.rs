use std::io::{BufRead, Write};
use itertools::Itertools;
use chainmap::{ChainMap, Layer};
use crate::cli_args::CliArgs;
use crate::console::{self, Result};

/// Runs the interactive demo: builds the base layers, then drives the
/// chain through a fixed menu of operations. All text I/O happens here
/// and in [`console`]; the container itself never touches the terminal.
pub struct Driver {
    args: CliArgs,
    chain: ChainMap<String, String>,
}

impl Driver {
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            chain: ChainMap::new(),
        }
    }

    pub fn run(mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut input = stdin.lock();
        let mut output = stdout.lock();

        self.setup(&mut input, &mut output)?;
        self.menu_loop(&mut input, &mut output)
    }

    fn setup<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        self.chain = if self.args.sample {
            Self::sample_chain()
        } else {
            let mut layers = Vec::with_capacity(self.args.layers);
            for index in 0..self.args.layers {
                layers.push(console::read_layer(input, output, &format!("base {index}"))?);
            }
            ChainMap::with_layers(layers)
        };

        log::debug!(
            "chain ready; {} stack layers, {} entries",
            self.chain.layer_count(),
            self.chain.len()
        );
        Ok(())
    }

    fn sample_chain() -> ChainMap<String, String> {
        let layers = [
            [("lang", "en"), ("theme", "light")].as_slice(),
            [("theme", "dark"), ("pages", "10")].as_slice(),
            [("pages", "25"), ("cache", "off")].as_slice(),
        ]
        .iter()
        .map(|entries| {
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Layer<String, String>>()
        })
        .collect();

        ChainMap::with_layers(layers)
    }

    fn menu_loop<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            self.print_menu(output)?;
            let choice = console::prompt_nonempty(input, output, "choose an operation: ")?;

            match choice.as_str() {
                "1" => self.show_entries(output)?,
                "2" => self.insert_key(input, output)?,
                "3" => self.set_key(input, output)?,
                "4" => self.add_layer(input, output)?,
                "5" => self.remove_key(input, output)?,
                "6" => self.list_keys(output)?,
                "7" => self.list_values(output)?,
                "8" => self.membership(input, output)?,
                "9" => self.show_merged(output)?,
                "0" | "q" => return Ok(()),
                other => writeln!(output, "unknown choice '{other}'")?,
            }
        }
    }

    fn print_menu<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "=== chain menu ===")?;
        writeln!(output, " 1. show all entries")?;
        writeln!(output, " 2. insert a new key")?;
        writeln!(output, " 3. set an existing key")?;
        writeln!(output, " 4. add a layer at a priority")?;
        writeln!(output, " 5. remove a key")?;
        writeln!(output, " 6. list keys with their sources")?;
        writeln!(output, " 7. list values with their sources")?;
        writeln!(output, " 8. membership queries")?;
        writeln!(output, " 9. show the merged view")?;
        writeln!(output, " 0. quit")?;
        Ok(())
    }

    fn show_entries<W: Write>(&self, output: &mut W) -> Result<()> {
        for (key, value) in &self.chain {
            writeln!(output, "  {key} = {value}")?;
        }
        writeln!(output, "{} entries across all layers", self.chain.len())?;
        Ok(())
    }

    fn insert_key<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let key = console::prompt_nonempty(input, output, "key to insert: ")?;
        let value = console::prompt_nonempty(input, output, "value: ")?;

        match self.chain.insert(key.clone(), value) {
            Ok(()) => writeln!(output, "'{key}' added to the override layer")?,
            Err(e) => writeln!(output, "cannot insert '{key}': {e}")?,
        }
        Ok(())
    }

    fn set_key<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let key = console::prompt_nonempty(input, output, "key to set: ")?;
        let value = console::prompt_nonempty(input, output, "new value: ")?;

        match self.chain.set(key.clone(), value) {
            Ok(()) => writeln!(output, "'{key}' now resolves from the override layer")?,
            Err(e) => writeln!(output, "cannot set '{key}': {e}")?,
        }
        Ok(())
    }

    fn add_layer<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let layer = console::read_layer(input, output, "new")?;
        let priority = console::prompt_index(
            input,
            output,
            &format!("priority (0..={}): ", self.chain.layer_count()),
            self.chain.layer_count(),
        )?;

        match self.chain.add_layer(layer, priority) {
            Ok(()) => writeln!(output, "layer added at priority {priority}")?,
            Err(e) => writeln!(output, "cannot add layer: {e}")?,
        }
        Ok(())
    }

    fn remove_key<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let key = console::prompt_nonempty(input, output, "key to remove: ")?;

        match self.chain.remove(&key) {
            Some(value) => {
                writeln!(output, "'{key}' removed from the override layer (was '{value}')")?;
                if let Ok(shadowed) = self.chain.get(&key) {
                    writeln!(output, "a base layer still resolves it to '{shadowed}'")?;
                }
            }
            None if self.chain.contains_key(&key) => {
                writeln!(output, "'{key}' lives in a base layer only; it cannot be removed")?
            }
            None => writeln!(output, "'{key}' is not in the chain")?,
        }
        Ok(())
    }

    fn list_keys<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "override: {}", self.chain.override_layer().keys().join(", "))?;
        for (index, layer) in self.chain.layers().enumerate() {
            writeln!(output, "layer {index}: {}", layer.keys().join(", "))?;
        }
        Ok(())
    }

    fn list_values<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "override: {}", self.chain.override_layer().values().join(", "))?;
        for (index, layer) in self.chain.layers().enumerate() {
            writeln!(output, "layer {index}: {}", layer.values().join(", "))?;
        }
        Ok(())
    }

    fn membership<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let key = console::prompt_nonempty(input, output, "key to look for: ")?;
        match self.chain.try_get(&key) {
            Some(value) => writeln!(output, "'{key}' resolves to '{value}'")?,
            None => writeln!(output, "no layer holds '{key}'")?,
        }

        let value = console::prompt_nonempty(input, output, "value to look for: ")?;
        writeln!(
            output,
            "value '{value}' present: {}",
            self.chain.contains_value(&value)
        )?;
        writeln!(
            output,
            "exact pair '{key}' = '{value}' present: {}",
            self.chain.contains_entry(&key, &value)
        )?;
        Ok(())
    }

    fn show_merged<W: Write>(&self, output: &mut W) -> Result<()> {
        let flat = self.chain.merge();
        for (key, value) in &flat {
            writeln!(output, "  {key} = {value}")?;
        }
        writeln!(output, "{} distinct keys", flat.len())?;
        Ok(())
    }
}
