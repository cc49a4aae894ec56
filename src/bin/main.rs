use naca4_rs::airfoil::generate::generate_airfoil;
use naca4_rs::airfoil::record::AirfoilRecord;
use naca4_rs::airfoil::xfoil::write_dat;
use naca4_rs::airfoil::ShapeParameters;
use std::env;
use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let out_dir = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("generated_airfoils_json");
    create_dir_all(out_dir).expect("Failed to create output directory");

    for m_step in 0..4 {
        for p_step in 2..6 {
            for t_step in 2..5 {
                let params = ShapeParameters::new(
                    0.02 * m_step as f64,
                    0.1 * p_step as f64,
                    0.04 * t_step as f64,
                    100,
                )
                .expect("Invalid sweep parameters");

                let airfoil = generate_airfoil(&params).expect("Failed to generate airfoil");
                let record = AirfoilRecord::new(params, &airfoil);
                let name = record.naca_name();

                let json_path = Path::new(out_dir).join(format!("{}.json", name));
                record.write(&json_path).expect("Failed writing record");

                let dat_path = Path::new(out_dir).join(format!("{}.dat", name));
                let file = File::create(&dat_path).expect("Failed creating dat file");
                let mut writer = BufWriter::new(file);
                write_dat(&mut writer, &record.coordinates).expect("Failed writing dat file");

                println!("{}", name);
            }
        }
    }
}
