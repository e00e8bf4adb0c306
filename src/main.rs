use {
    std::{env, error::Error as _, process},
    text_huffman::{Compressor, Result},
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let compressor = Compressor::default();

    let outcome = match args.iter().map(String::as_str).collect::<Vec<_>>()[..] {
        ["compress", source, dest] => compress(&compressor, source, dest),
        ["write", dest, text] => write(&compressor, dest, text),
        ["decompress", source] => decompress(&compressor, source),
        ["report", original, compressed] => report(&compressor, original, compressed),
        _ => print_usage(),
    };

    if let Err(err) = outcome {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

fn print_usage() -> ! {
    println!("Usage:");
    println!("  text-huffman compress <source> <dest>        Compress a text file; the code table goes next to <dest>");
    println!("  text-huffman write <dest> <text>             Compress the given text; the code table goes next to <dest>");
    println!("  text-huffman decompress <path>               Decompress a file and write the text to stdout");
    println!("  text-huffman report <original> <compressed>  Compare the sizes of two files");
    process::exit(1)
}

fn compress(compressor: &Compressor, source: &str, dest: &str) -> Result<()> {
    let table_path = compressor.table_path_for(dest);
    compressor.compress(source, dest, &table_path)?;
    report(compressor, source, dest)
}

fn write(compressor: &Compressor, dest: &str, text: &str) -> Result<()> {
    let table_path = compressor.table_path_for(dest);
    compressor.write_and_compress(dest, &table_path, text)?;
    println!("Wrote {} (code table in {})", dest, table_path.display());
    Ok(())
}

fn decompress(compressor: &Compressor, source: &str) -> Result<()> {
    let text = compressor.decompress(source)?;
    println!("{}", text);
    Ok(())
}

fn report(compressor: &Compressor, original: &str, compressed: &str) -> Result<()> {
    let report = compressor.compression_report(original, compressed)?;
    println!("{}", report);
    Ok(())
}
