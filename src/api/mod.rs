pub mod defillama;
